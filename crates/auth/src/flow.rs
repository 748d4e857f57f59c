use crate::api::AuthClient;
use crate::session::SessionStore;
use blog_core::{RequestFailure, TokenPair};

/// Logs in and stores the issued tokens in `session`.
///
/// The session is left untouched when the login fails.
pub async fn login(
    client: &AuthClient,
    session: &dyn SessionStore,
    username: &str,
    password: &str,
) -> Result<TokenPair, RequestFailure> {
    if username.is_empty() || password.is_empty() {
        tracing::warn!("Login attempted without username or password");
        return Err(RequestFailure::LoginFailed(
            "username and password are required".to_string(),
        ));
    }

    let tokens = client.login(username, password).await?;
    session.set(tokens.clone()).await;
    Ok(tokens)
}

/// Invalidates the refresh token server-side, then clears `session`.
///
/// The local session is purged even when invalidation fails; that failure
/// is still returned.
pub async fn logout(client: &AuthClient, session: &dyn SessionStore) -> Result<(), RequestFailure> {
    let tokens = session.current().await;

    let result = if tokens.refresh_token.is_empty() {
        tracing::debug!("No refresh token held, skipping invalidation");
        Ok(())
    } else {
        client.invalidate(&tokens.refresh_token).await
    };

    tracing::info!("Purging local tokens");
    session.clear().await;

    if let Err(ref e) = result {
        tracing::error!("Unable to logout cleanly: {}", e);
    }
    result
}
