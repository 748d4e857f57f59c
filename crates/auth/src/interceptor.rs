use crate::api::TokenRefresher;
use crate::session::SessionStore;
use blog_core::transport::send;
use blog_core::{classify, FailureOutcome, RequestFailure};
use reqwest::{Client, RequestBuilder, Response};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Attaches session credentials to outgoing calls and recovers from an
/// expired access token by refreshing the session and replaying once.
///
/// Refreshes are serialized: a call that hits a 401 while another call is
/// already refreshing waits for it and reuses the rotated tokens.
pub struct Interceptor {
    http: Client,
    session: Arc<dyn SessionStore>,
    refresher: Arc<dyn TokenRefresher>,
    refresh_guard: Mutex<()>,
}

impl Interceptor {
    pub fn new(
        http: Client,
        session: Arc<dyn SessionStore>,
        refresher: Arc<dyn TokenRefresher>,
    ) -> Self {
        Self {
            http,
            session,
            refresher,
            refresh_guard: Mutex::new(()),
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Like [`Interceptor::send`], but refuses to go out without an access
    /// token.
    pub async fn send_authorized<F>(&self, build: F) -> Result<Response, RequestFailure>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        if !self.session.is_logged_in().await || self.session.current().await.access_token.is_empty()
        {
            tracing::error!("Refusing to send request: no credentials attached");
            return Err(RequestFailure::MissingCredentials);
        }
        self.send(build).await
    }

    /// `build` is called again for the replay, so it must be repeatable.
    pub async fn send<F>(&self, build: F) -> Result<Response, RequestFailure>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        let mut retried = false;

        loop {
            let logged_in = self.session.is_logged_in().await;
            let access_token = self.session.current().await.access_token;

            let mut request = build(&self.http);
            if logged_in {
                request = request.bearer_auth(&access_token);
            }

            match send(request).await {
                Ok(response) => return Ok(response),
                Err(FailureOutcome::Response { status: 401 }) if logged_in && !retried => {
                    retried = true;
                    tracing::warn!("Access token rejected, attempting refresh...");
                    self.refresh_session(&access_token).await?;
                }
                Err(outcome) => {
                    let err = classify(&outcome);
                    tracing::error!("Request failed: {}", err);
                    return Err(err);
                }
            }
        }
    }

    async fn refresh_session(&self, rejected_token: &str) -> Result<(), RequestFailure> {
        let _guard = self.refresh_guard.lock().await;

        let tokens = self.session.current().await;
        if tokens.access_token != rejected_token {
            tracing::debug!("Session was refreshed by a concurrent request, replaying");
            return Ok(());
        }

        match self.refresher.refresh(&tokens.refresh_token).await {
            Ok(new_tokens) => {
                self.session.set(new_tokens).await;
                tracing::info!("Token refresh successful");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Token refresh failed: {}", e);
                Err(e)
            }
        }
    }
}
