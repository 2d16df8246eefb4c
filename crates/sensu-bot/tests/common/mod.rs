//! Common test utilities for integration tests.

#![allow(dead_code)]

use sensu_bot::commands::default_handlers;
use sensu_bot::CommandRouter;
use sensu_client::{BasicAuth, SensuClient};
use signal_client::BotMessage;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub const DOMAIN: &str = "example.com";
pub const USER: &str = "Alice";

/// Start a mock Sensu API server.
pub async fn mock_sensu_server() -> MockServer {
    MockServer::start().await
}

/// Create a Sensu client pointed at the mock server.
pub fn test_sensu_client(mock_server: &MockServer, auth: Option<BasicAuth>) -> SensuClient {
    SensuClient::new(mock_server.uri(), auth, Duration::from_secs(5)).unwrap()
}

/// Router with every command, qualifying names with [`DOMAIN`].
pub fn test_router(mock_server: &MockServer) -> CommandRouter {
    router_with(mock_server, Some(DOMAIN), None)
}

pub fn router_with(
    mock_server: &MockServer,
    domain: Option<&str>,
    auth: Option<BasicAuth>,
) -> CommandRouter {
    let sensu = Arc::new(test_sensu_client(mock_server, auth));
    CommandRouter::new(default_handlers(sensu, domain.map(String::from)))
}

/// A direct message from [`USER`].
pub fn message(text: &str) -> BotMessage {
    BotMessage::direct("+14155551234", USER, text)
}

/// Run `text` through the router and return the reply.
pub async fn reply(router: &CommandRouter, text: &str) -> String {
    router.respond(&message(text)).await.unwrap()
}

/// JSON bodies of every request the server received.
pub async fn received_bodies(mock_server: &MockServer) -> Vec<serde_json::Value> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
