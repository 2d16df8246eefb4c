//! End-to-end tests: chat message in, Sensu call out, reply back to chat.

mod common;

use common::{message, mock_sensu_server, received_bodies, reply, test_router};
use signal_client::SignalClient;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_show_client_e2e() {
    let sensu_server = mock_sensu_server().await;

    Mock::given(method("GET"))
        .and(path("/clients/web01.example.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "web01.example.com"})),
        )
        .expect(1)
        .mount(&sensu_server)
        .await;

    let router = test_router(&sensu_server);
    assert_eq!(
        reply(&router, "sensu client web01").await,
        "{\n  \"name\": \"web01.example.com\"\n}"
    );
}

#[tokio::test]
async fn test_silence_e2e() {
    let sensu_server = mock_sensu_server().await;

    Mock::given(method("POST"))
        .and(path("/stashes"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&sensu_server)
        .await;

    let router = test_router(&sensu_server);
    assert_eq!(
        reply(&router, "silence web01/nginx for 10m because testing").await,
        "web01.example.com/nginx silenced for 10m"
    );

    let bodies = received_bodies(&sensu_server).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["path"], "silence/web01.example.com/nginx");
    assert_eq!(bodies[0]["expire"], 600);
    assert_eq!(bodies[0]["content"]["reason"], "testing");
}

#[tokio::test]
async fn test_resolve_malformed_e2e() {
    let sensu_server = mock_sensu_server().await;

    Mock::given(method("POST"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&sensu_server)
        .await;

    let router = test_router(&sensu_server);
    let response = reply(&router, "resolve event web01/nginx").await;

    assert!(response.contains("malformed"));
    assert!(response.contains(r#"{"client":"web01.example.com","check":"nginx"}"#));
}

#[tokio::test]
async fn test_reply_delivered_over_signal() {
    let sensu_server = mock_sensu_server().await;
    let signal_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/clients/web01.example.com"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&sensu_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_json(serde_json::json!({
            "message": "web01.example.com removed",
            "number": "+15555555555",
            "recipients": ["+14155551234"]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    let router = test_router(&sensu_server);
    let signal = SignalClient::new(signal_server.uri(), "+15555555555").unwrap();

    let incoming = message("sensu remove client web01");
    let response = router.respond(&incoming).await.unwrap();
    signal.reply(&incoming, &response).await.unwrap();
}

#[tokio::test]
async fn test_chatter_is_ignored() {
    let sensu_server = mock_sensu_server().await;
    let router = test_router(&sensu_server);

    assert!(router.respond(&message("is sensu down again?")).await.is_none());
    assert!(sensu_server.received_requests().await.unwrap().is_empty());
}
