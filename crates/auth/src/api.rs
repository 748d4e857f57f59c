use async_trait::async_trait;
use blog_core::transport::{decode, send};
use blog_core::{classify, ClientConfig, RequestFailure, TokenPair};
use serde::Serialize;

const LOGIN_PATH: &str = "/api/v1/auth/login";
const REFRESH_PATH: &str = "/api/v1/auth/refresh";
const LOGOUT_PATH: &str = "/api/v1/auth/logout";

/// Exchanges a refresh token for a new token pair.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, RequestFailure>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequestBody<'a> {
    refresh_token: &'a str,
}

/// Client for the `/api/v1/auth` endpoints.
///
/// Stateless: it never touches the session. See [`crate::flow`] for the
/// operations that do.
#[derive(Clone, Debug)]
pub struct AuthClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl AuthClient {
    pub fn new(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Basic auth login.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, RequestFailure> {
        tracing::info!("Attempting basic auth login");
        let request = self
            .http
            .post(self.config.endpoint(LOGIN_PATH))
            .basic_auth(username, Some(password));

        let response = send(request).await.map_err(|outcome| {
            let err = classify(&outcome);
            tracing::error!("Login request failed: {}", err);
            err
        })?;

        let tokens: TokenPair = decode(response).await?;
        tracing::info!("Login successful");
        Ok(tokens)
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, RequestFailure> {
        tracing::info!("Refreshing access token");
        let request = self
            .http
            .post(self.config.endpoint(REFRESH_PATH))
            .json(&RefreshRequestBody { refresh_token });

        let response = send(request).await.map_err(|outcome| {
            let err = classify(&outcome);
            tracing::error!("Refresh request failed: {}", err);
            err
        })?;

        decode(response).await
    }

    /// Invalidates a refresh token server-side. The response body is ignored.
    pub async fn invalidate(&self, refresh_token: &str) -> Result<(), RequestFailure> {
        tracing::info!("Invalidating refresh token");
        let request = self
            .http
            .post(self.config.endpoint(LOGOUT_PATH))
            .json(&RefreshRequestBody { refresh_token });

        send(request).await.map(|_| ()).map_err(|outcome| {
            let err = classify(&outcome);
            tracing::error!("Unable to invalidate refresh token: {}", err);
            err
        })
    }
}

#[async_trait]
impl TokenRefresher for AuthClient {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, RequestFailure> {
        AuthClient::refresh(self, refresh_token).await
    }
}
