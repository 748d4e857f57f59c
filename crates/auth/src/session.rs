use async_trait::async_trait;
use blog_core::TokenPair;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holder of the current credentials.
///
/// Owned by the composition root and handed to everything that reads or
/// rotates tokens.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a fresh pair and marks the session logged in.
    async fn set(&self, tokens: TokenPair);
    /// Drops the tokens and marks the session logged out.
    async fn clear(&self);
    async fn is_logged_in(&self) -> bool;
    async fn current(&self) -> TokenPair;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub tokens: TokenPair,
    pub logged_in: bool,
}

/// In-memory session shared between clones.
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    state: Arc<RwLock<SessionState>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl SessionStore for SharedSession {
    async fn set(&self, tokens: TokenPair) {
        let mut state = self.state.write().await;
        state.tokens = tokens;
        state.logged_in = true;
        tracing::debug!("Session tokens replaced");
    }

    async fn clear(&self) {
        let mut state = self.state.write().await;
        *state = SessionState::default();
        tracing::debug!("Session cleared");
    }

    async fn is_logged_in(&self) -> bool {
        self.state.read().await.logged_in
    }

    async fn current(&self) -> TokenPair {
        self.state.read().await.tokens.clone()
    }
}
