use crate::helpers::client::{client_for, logged_in_client};
use crate::helpers::mock_server::{MockServer, VALID_BASIC};
use axum::http::StatusCode;
use islandwind_client::{PostInput, RequestFailure, TokenPair};

/// 観点: ログインで発行されたトークンが以降のリクエストに付与されるか
#[tokio::test]
async fn test_login_then_bearer_on_next_call() {
    let server = MockServer::start().await;
    let id = server.seed_post("Hello");
    let client = client_for(&server);

    let tokens = client.login("u", "p").await.unwrap();
    assert_eq!(tokens.access_token, "a1");
    assert_eq!(tokens.refresh_token, "r1");
    assert!(client.is_logged_in().await);
    assert_eq!(
        server.last_request("POST", "/api/v1/auth/login").authorization.as_deref(),
        Some(VALID_BASIC)
    );

    client.blogposts.get(&id).await.unwrap();

    let path = format!("/api/v1/blog/post/{}", id);
    assert_eq!(
        server.last_request("GET", &path).authorization.as_deref(),
        Some("Bearer a1")
    );
}

/// 観点: 認証情報が誤っている場合はセッションが作られない
#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.login("u", "wrong").await.unwrap_err();

    assert_eq!(err, RequestFailure::Unauthorized);
    assert!(!client.is_logged_in().await);
    assert_eq!(client.session().current().await, TokenPair::default());
}

/// 観点: アクセストークン失効時に一度だけリフレッシュしてリクエストを再送するか
/// 1. ログイン (a1/r1)
/// 2. サーバー側で a1 を失効させる
/// 3. 書き込み -> 401 -> リフレッシュ (a2/r2) -> 再送
#[tokio::test]
async fn test_expired_token_is_refreshed_and_replayed() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    server.expire_access_token();

    let post = client
        .blogposts
        .post(&PostInput::new("After refresh", "body", false))
        .await
        .unwrap();

    assert_eq!(post.title(), "After refresh");
    assert_eq!(server.hits("POST", "/api/v1/auth/refresh"), 1);
    assert_eq!(server.hits("POST", "/api/v1/blog/post"), 2);

    let refresh = server.last_request("POST", "/api/v1/auth/refresh");
    assert_eq!(refresh.authorization, None);
    assert_eq!(refresh.body.unwrap()["refreshToken"], "r1");

    let replay = server.last_request("POST", "/api/v1/blog/post");
    assert_eq!(replay.authorization.as_deref(), Some("Bearer a2"));

    let current = client.session().current().await;
    assert_eq!(current.access_token, "a2");
    assert_eq!(current.refresh_token, "r2");
}

/// 観点: リフレッシュ自体が拒否された場合はそのエラーが返り、再送しない
#[tokio::test]
async fn test_rejected_refresh_is_surfaced() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    server.revoke_session();

    let err = client
        .blogposts
        .post(&PostInput::new("t", "c", true))
        .await
        .unwrap_err();

    assert_eq!(err, RequestFailure::Unauthorized);
    assert_eq!(server.hits("POST", "/api/v1/auth/refresh"), 1);
    assert_eq!(server.hits("POST", "/api/v1/blog/post"), 1);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    client.logout().await.unwrap();

    assert!(!client.is_logged_in().await);
    let logout = server.last_request("POST", "/api/v1/auth/logout");
    assert_eq!(logout.body.unwrap()["refreshToken"], "r1");

    let err = client
        .blogposts
        .post(&PostInput::new("t", "c", true))
        .await
        .unwrap_err();
    assert_eq!(err, RequestFailure::MissingCredentials);
    assert_eq!(server.hits("POST", "/api/v1/blog/post"), 0);
}

/// 観点: サーバー側のログアウトが失敗してもローカルのトークンは破棄される
#[tokio::test]
async fn test_logout_failure_still_purges_tokens() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    server.fail_logout_with(StatusCode::INTERNAL_SERVER_ERROR);

    let err = client.logout().await.unwrap_err();

    assert_eq!(err, RequestFailure::BackendInternal);
    assert!(!client.is_logged_in().await);
    assert_eq!(client.session().current().await, TokenPair::default());
}
