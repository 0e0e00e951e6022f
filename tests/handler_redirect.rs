mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    let code = state.store.shorten("https://example.com/target").unwrap();
    let server = common::create_test_server(state);

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_after_shorten_round_trip() {
    let server = common::create_test_server(common::create_test_state());

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a?b=c#d" }))
        .await
        .json::<serde_json::Value>();
    let code = created["code"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/a?b=c#d");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "zzzzzz");
}

#[tokio::test]
async fn test_redirect_malformed_code_not_found() {
    let server = common::create_test_server(common::create_test_state());

    server.get("/favicon.ico").await.assert_status_not_found();
    server.get("/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let state = common::create_state_with_generator(
        std::sync::Arc::new(common::FixedKeyGenerator("AbCdEf")),
        1,
    );
    state.store.shorten("https://example.com").unwrap();
    let server = common::create_test_server(state);

    assert_eq!(server.get("/AbCdEf").await.status_code(), 302);
    server.get("/abcdef").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_post_not_allowed() {
    let state = common::create_test_state();
    let code = state.store.shorten("https://example.com").unwrap();
    let server = common::create_test_server(state);

    let response = server.post(&format!("/{code}")).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
