//! Request gateway tests against a real HTTP server (wiremock) through the
//! reqwest adapter.

use blogfront::adapters::ReqwestHttpClient;
use blogfront::gateway::{FormData, Gateway, HttpVerb, Outcome, RequestDescriptor};
use std::sync::Arc;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(origin: &str) -> Gateway {
    let client = ReqwestHttpClient::new().expect("client builds");
    Gateway::new(origin, Arc::new(client))
}

const ALL_VERBS: [HttpVerb; 5] = [
    HttpVerb::Get,
    HttpVerb::Post,
    HttpVerb::Put,
    HttpVerb::Patch,
    HttpVerb::Delete,
];

#[tokio::test]
async fn test_form_body_is_exact_urlencoding() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("username=mao+zedong&password=a%26b%3Dc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let form = FormData::new()
        .with("username", "mao zedong")
        .with("password", "a&b=c");
    let outcome = gateway_for(&server.uri())
        .send("/auth/login", HttpVerb::Post, Some(&form))
        .await;

    assert_eq!(outcome.response().map(|r| r.status), Some(200));
}

#[tokio::test]
async fn test_request_without_form_has_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    gateway_for(&server.uri())
        .send("/posts", HttpVerb::Get, None)
        .await;

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_non_2xx_is_returned_unmodified() {
    let server = MockServer::start().await;
    let body = r#"{"title":["required"]}"#;
    Mock::given(method("PATCH"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(422).set_body_string(body))
        .mount(&server)
        .await;

    let outcome = gateway_for(&server.uri())
        .send("/users/u1?post=p1&bookmark=true", HttpVerb::Patch, None)
        .await;

    match outcome {
        Outcome::Response(response) => {
            assert_eq!(response.status, 422);
            assert!(!response.is_ok());
            assert_eq!(response.text().unwrap(), body);
        }
        Outcome::TransportError(err) => panic!("expected response, got {}", err),
    }
}

#[tokio::test]
async fn test_server_error_is_not_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("null"))
        .mount(&server)
        .await;

    let outcome = gateway_for(&server.uri()).send("/posts", HttpVerb::Get, None).await;

    assert!(!outcome.is_transport_error());
    assert_eq!(outcome.response().map(|r| r.status), Some(503));
}

#[tokio::test]
async fn test_query_string_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/u1"))
        .and(query_param("post", "p1"))
        .and(query_param("bookmark", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = gateway_for(&server.uri())
        .send("/users/u1?post=p1&bookmark=false", HttpVerb::Patch, None)
        .await;

    assert_eq!(outcome.response().map(|r| r.status), Some(200));
}

#[tokio::test]
async fn test_trailing_slash_origin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let origin = format!("{}/", server.uri());
    let outcome = gateway_for(&origin).send("/posts", HttpVerb::Get, None).await;

    assert_eq!(outcome.response().map(|r| r.status), Some(200));
}

#[tokio::test]
async fn test_session_cookie_is_sent_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "connect.sid=abc123; Path=/; HttpOnly")
                .set_body_json(serde_json::json!({ "_id": "u1", "username": "mao" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/user"))
        .and(header("cookie", "connect.sid=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "_id": "u1" })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri());
    let form = FormData::new().with("username", "mao").with("password", "pw");
    gateway.send("/auth/login", HttpVerb::Post, Some(&form)).await;
    let outcome = gateway.send("/auth/user", HttpVerb::Get, None).await;

    assert_eq!(outcome.response().map(|r| r.status), Some(200));
}

#[tokio::test]
async fn test_identical_gets_give_equivalent_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "_id": "p1" }])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri());
    let first = gateway.send("/posts", HttpVerb::Get, None).await;
    let second = gateway.send("/posts", HttpVerb::Get, None).await;

    let first: serde_json::Value = first.response().unwrap().json().unwrap();
    let second: serde_json::Value = second.response().unwrap().json().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error_for_every_verb() {
    // Nothing listens on port 1.
    let gateway = gateway_for("http://127.0.0.1:1");
    let form = FormData::new().with("text", "hi");

    for verb in ALL_VERBS {
        let outcome = gateway.send("/posts", verb, None).await;
        assert!(outcome.is_transport_error(), "{} should fail to connect", verb);

        let descriptor = RequestDescriptor::new("/posts/p1/comments", verb).with_form(form.clone());
        assert!(gateway.send_descriptor(&descriptor).await.is_transport_error());
    }
}

#[tokio::test]
async fn test_unresolvable_host_is_transport_error() {
    let gateway = gateway_for("http://blogfront-test.invalid");
    let outcome = gateway.send("/posts", HttpVerb::Get, None).await;
    assert!(outcome.is_transport_error());
}
