use crate::helpers::client::{client_for, client_with_timeout};
use crate::helpers::mock_server::MockServer;
use axum::http::StatusCode;
use islandwind_client::{ClientConfig, HttpClient, RequestFailure};
use std::time::Duration;

/// 観点: 設定したタイムアウトを超えると Network エラーになる
#[tokio::test]
async fn test_timeout_is_network_failure() {
    let server = MockServer::start().await;
    server.delay_reads(Duration::from_secs(2));
    let client = client_with_timeout(&server, Duration::from_millis(100));

    let err = client.blogposts.list().await.unwrap_err();
    assert_eq!(err, RequestFailure::Network(None));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_failure() {
    // Reserve a port, then close it so nothing is listening
    let port = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = HttpClient::new(ClientConfig::new(format!("http://127.0.0.1:{}", port))).unwrap();

    let err = client.blogposts.get("any").await.unwrap_err();
    assert!(matches!(err, RequestFailure::Network(_)));
}

/// 観点: URL が不正でリクエストを組み立てられない場合はメッセージ付きの Network エラー
#[tokio::test]
async fn test_unbuildable_request_is_network_failure_with_message() {
    let client = HttpClient::new(ClientConfig::new("not a url")).unwrap();

    let err = client.blogposts.get("x").await.unwrap_err();

    match err {
        RequestFailure::Network(Some(message)) => assert!(!message.is_empty()),
        other => panic!("expected Network(Some(..)), got {:?}", other),
    }
}

/// 観点: ステータスコードごとに期待するエラー種別が返るか
#[tokio::test]
async fn test_status_codes_are_classified() {
    let cases = [
        (StatusCode::BAD_REQUEST, RequestFailure::BadRequest),
        (StatusCode::FORBIDDEN, RequestFailure::Forbidden),
        (StatusCode::INTERNAL_SERVER_ERROR, RequestFailure::BackendInternal),
        (StatusCode::IM_A_TEAPOT, RequestFailure::UnexpectedStatusCode(418)),
        (StatusCode::BAD_GATEWAY, RequestFailure::UnexpectedStatusCode(502)),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        server.fail_reads_with(status);
        let client = client_for(&server);

        let err = client.blogposts.list().await.unwrap_err();
        assert_eq!(err, expected, "status {}", status);
    }
}

/// 観点: 401 はセッションがなければリフレッシュせずにそのまま返す
#[tokio::test]
async fn test_unauthorized_read_without_session() {
    let server = MockServer::start().await;
    server.fail_reads_with(StatusCode::UNAUTHORIZED);
    let client = client_for(&server);

    let err = client.blogposts.get("any").await.unwrap_err();

    assert_eq!(err, RequestFailure::Unauthorized);
    assert_eq!(server.hits("POST", "/api/v1/auth/refresh"), 0);
}

#[tokio::test]
async fn test_malformed_body_is_unknown_failure() {
    let server = MockServer::start().await;
    server.serve_raw_reads(r#"{"data": [{"id": 1}]"#);
    let client = client_for(&server);

    let err = client.blogposts.list().await.unwrap_err();
    assert_eq!(err, RequestFailure::UnknownRequestFailure);
}

#[tokio::test]
async fn test_empty_credentials_rejected_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.login("", "p").await.unwrap_err();

    assert!(matches!(err, RequestFailure::LoginFailed(_)));
    assert!(server.requests().is_empty());
}
