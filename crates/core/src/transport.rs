use crate::error::{FailureOutcome, RequestFailure};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Sends a request and reduces any failure to a [`FailureOutcome`].
///
/// Only 2xx responses come back as `Ok`.
pub async fn send(request: RequestBuilder) -> Result<Response, FailureOutcome> {
    match request.send().await {
        Ok(response) if response.status().is_success() => Ok(response),
        Ok(response) => {
            let status = response.status();
            let url = response.url().clone();
            let text = response.text().await.unwrap_or_default();
            tracing::debug!("{} answered {}: {}", url.path(), status, text);
            Err(FailureOutcome::Response {
                status: status.as_u16(),
            })
        }
        Err(e) => {
            tracing::debug!("Request failed before a response arrived: {}", e);
            Err(FailureOutcome::from(&e))
        }
    }
}

/// Parses a successful response body.
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RequestFailure> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!("Failed to parse response body: {}", e);
        RequestFailure::from(e)
    })
}
