//! Client for the islandwind blog API.
//!
//! [`HttpClient`] wires the pieces together: one shared `reqwest` client, one
//! session, the auth endpoints and the blog resource behind the refreshing
//! interceptor.

use std::sync::Arc;

pub use auth::{AuthClient, Interceptor, SessionState, SessionStore, SharedSession, TokenRefresher};
pub use blog::{BlogClient, PostFilter};
pub use blog_core::{
    ClientConfig, DeleteOptions, Metadata, NextCursor, Post, PostInput, PostListPage, PostPatch,
    RequestFailure, TokenPair,
};

pub struct HttpClient {
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
    auth: AuthClient,
    pub blogposts: BlogClient,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        Self::with_session(config, Arc::new(SharedSession::new()))
    }

    /// Builds a client around an existing session, e.g. one restored by the
    /// caller.
    pub fn with_session(
        config: ClientConfig,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, reqwest::Error> {
        let http = config.build_http_client()?;
        let auth = AuthClient::new(config.clone(), http.clone());
        let interceptor = Arc::new(Interceptor::new(
            http,
            session.clone(),
            Arc::new(auth.clone()),
        ));
        let blogposts = BlogClient::new(config.clone(), interceptor);

        tracing::debug!("HTTP client ready for {}", config.base_url());
        Ok(Self {
            config,
            session,
            auth,
            blogposts,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub async fn is_logged_in(&self) -> bool {
        self.session.is_logged_in().await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, RequestFailure> {
        auth::login(&self.auth, self.session.as_ref(), username, password).await
    }

    pub async fn logout(&self) -> Result<(), RequestFailure> {
        auth::logout(&self.auth, self.session.as_ref()).await
    }
}
