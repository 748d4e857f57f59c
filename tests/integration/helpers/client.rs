use super::mock_server::MockServer;
use islandwind_client::{ClientConfig, HttpClient};
use std::time::Duration;

pub fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(ClientConfig::new(server.base_url())).unwrap()
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> HttpClient {
    HttpClient::new(ClientConfig::new(server.base_url()).with_timeout(timeout)).unwrap()
}

/// Client already holding the a1/r1 pair.
pub async fn logged_in_client(server: &MockServer) -> HttpClient {
    let client = client_for(server);
    client.login("u", "p").await.unwrap();
    client
}
