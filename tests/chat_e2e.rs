// tests/chat_e2e.rs
// End-to-end chat flow against a stubbed completion provider: a real
// axum server on an ephemeral port standing in for the OpenAI endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use persona_chat::api::http::router;
use persona_chat::llm::{ChatMessage, CompletionClient, CompletionError};
use persona_chat::persona::PersonaRegistry;
use persona_chat::state::AppState;

/// Stub provider behaviors, keyed by handler.
async fn ok_handler(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({"choices": [{"message": {"content": "Hi there"}}]}))
}

/// Echoes back how many messages the provider was sent, so assembly
/// can be asserted across the full request path.
async fn count_handler(Json(body): Json<Value>) -> Json<Value> {
    let count = body["messages"].as_array().map_or(0, |m| m.len());
    Json(json!({"choices": [{"message": {"content": count.to_string()}}]}))
}

async fn quota_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({"error": {"code": "insufficient_quota", "message": "billing hard limit"}})),
    )
}

async fn bad_key_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": {"code": "invalid_api_key", "message": "bad key"}})),
    )
}

/// Spawn a stub provider exposing `handler` at the chat-completions
/// path; returns the full endpoint URL.
async fn spawn_stub_provider(stub: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub).await.unwrap();
    });
    format!("http://{}/v1/chat/completions", addr)
}

fn app_for(endpoint: String) -> axum::Router {
    let completion = CompletionClient::new(
        "test-key".to_string(),
        endpoint,
        "gpt-4o-mini".to_string(),
        5,
        20,
    )
    .expect("client should build");

    router(Arc::new(AppState::new(PersonaRegistry::builtin(), completion)))
}

fn chat_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn chat_happy_path_returns_completion_text() {
    let endpoint =
        spawn_stub_provider(Router::new().route("/v1/chat/completions", post(ok_handler))).await;
    let app = app_for(endpoint);

    let response = app
        .oneshot(chat_request(&json!({
            "message": "Hello",
            "persona": "hitesh",
            "conversationHistory": []
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response"], "Hi there");
    assert_eq!(body["persona"], "hitesh");

    let timestamp = body["timestamp"].as_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(timestamp).expect("timestamp should be RFC 3339");
}

#[tokio::test]
async fn chat_truncates_long_history_before_forwarding() {
    let endpoint =
        spawn_stub_provider(Router::new().route("/v1/chat/completions", post(count_handler)))
            .await;
    let app = app_for(endpoint);

    let history: Vec<Value> = (0..30)
        .map(|i| {
            json!({
                "role": if i % 2 == 0 { "user" } else { "assistant" },
                "content": format!("turn {}", i)
            })
        })
        .collect();

    let response = app
        .oneshot(chat_request(&json!({
            "message": "Hello",
            "persona": "piyush",
            "conversationHistory": history
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // 1 system + 20 history + 1 user
    assert_eq!(body["response"], "22");
}

#[tokio::test]
async fn provider_quota_failure_collapses_to_generic_500() {
    let endpoint =
        spawn_stub_provider(Router::new().route("/v1/chat/completions", post(quota_handler)))
            .await;
    let app = app_for(endpoint);

    let response = app
        .oneshot(chat_request(&json!({
            "message": "Hello",
            "persona": "hitesh"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    // Opaque on purpose: no quota or billing detail reaches the caller
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn completion_client_decodes_quota_error() {
    let endpoint =
        spawn_stub_provider(Router::new().route("/v1/chat/completions", post(quota_handler)))
            .await;
    let client = CompletionClient::new(
        "test-key".to_string(),
        endpoint,
        "gpt-4o-mini".to_string(),
        5,
        20,
    )
    .unwrap();

    let registry = PersonaRegistry::builtin();
    let err = client
        .generate_response(&registry, "Hello", "hitesh", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::QuotaExceeded));
}

#[tokio::test]
async fn completion_client_decodes_invalid_credential() {
    let endpoint =
        spawn_stub_provider(Router::new().route("/v1/chat/completions", post(bad_key_handler)))
            .await;
    let client = CompletionClient::new(
        "wrong-key".to_string(),
        endpoint,
        "gpt-4o-mini".to_string(),
        5,
        20,
    )
    .unwrap();

    let registry = PersonaRegistry::builtin();
    let err = client
        .generate_response(&registry, "Hello", "hitesh", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::InvalidCredential));
}

#[tokio::test]
async fn completion_client_accepts_typed_history() {
    let endpoint =
        spawn_stub_provider(Router::new().route("/v1/chat/completions", post(ok_handler))).await;
    let client = CompletionClient::new(
        "test-key".to_string(),
        endpoint,
        "gpt-4o-mini".to_string(),
        5,
        20,
    )
    .unwrap();

    let registry = PersonaRegistry::builtin();
    let history = vec![
        ChatMessage::user("What is React?"),
        ChatMessage::assistant("A UI library."),
    ];
    let response = client
        .generate_response(&registry, "And Node?", "hitesh", &history)
        .await
        .unwrap();

    assert_eq!(response, "Hi there");
}

#[tokio::test]
async fn completion_client_reports_unknown_persona() {
    let endpoint =
        spawn_stub_provider(Router::new().route("/v1/chat/completions", post(ok_handler))).await;
    let client = CompletionClient::new(
        "test-key".to_string(),
        endpoint,
        "gpt-4o-mini".to_string(),
        5,
        20,
    )
    .unwrap();

    let registry = PersonaRegistry::builtin();
    let history = vec![ChatMessage::user("earlier turn")];
    let err = client
        .generate_response(&registry, "Hello", "nobody", &history)
        .await
        .unwrap_err();

    match err {
        CompletionError::PersonaNotFound(id) => assert_eq!(id, "nobody"),
        other => panic!("expected PersonaNotFound, got {:?}", other),
    }
}
