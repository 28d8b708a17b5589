mod mocks;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use campus_chatbot::models::default_corpus;
use campus_chatbot::observability::MetricsTracker;
use campus_chatbot::server::{build_router, AppState, ADMIN_TOKEN_HEADER};
use campus_chatbot::services::{ChatService, ChatServiceImpl};
use campus_chatbot::Config;
use mocks::MockQaRepository;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn app_with_token(repo: &MockQaRepository, admin_token: Option<&str>) -> Router {
    let config = Config::default();
    let metrics = MetricsTracker::new();
    let chat = ChatServiceImpl::new(Arc::new(repo.clone()), &config, metrics.clone())
        .await
        .unwrap();
    let chat = Arc::new(chat) as Arc<dyn ChatService>;
    build_router(AppState::new(
        chat,
        metrics,
        admin_token.map(str::to_string),
    ))
}

async fn app() -> Router {
    app_with_token(&MockQaRepository::with_pairs(default_corpus()), None).await
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_chat_endpoint() {
    let app = app().await;

    let (status, body) = send(&app, post_json("/api/chat", json!({"message": "Hello"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Hello, how can I help you!");
    assert_eq!(body["source"], "small_talk");
    assert_eq!(body["confidence"], 1.0);

    let (_, body) = send(&app, post_json("/api/chat", json!({"message": "is wifi free"}))).await;
    assert_eq!(body["source"], "similarity");
    assert_eq!(body["matched_question"], "Is wifi available for students?");

    let (_, body) = send(&app, post_json("/api/chat", json!({"message": "bus routes"}))).await;
    assert_eq!(body["source"], "rule");
    assert_eq!(body["intent"], "transport");
}

#[tokio::test]
async fn test_chat_rejects_long_message() {
    let app = app().await;
    let message = "a".repeat(501);

    let (status, body) = send(&app, post_json("/api/chat", json!({ "message": message }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert!(body["error"].as_str().unwrap().contains("too long"));
}

#[tokio::test]
async fn test_malformed_bodies_are_json_400() {
    let app = app().await;

    let (status, body) = send(&app, post_json("/api/chat", json!({"msg": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert!(body["error"].as_str().unwrap().contains("message"));

    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/qa")
        .body(Body::from(r#"{"question":"q","answer":"a"}"#))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn test_calendar_endpoints() {
    let app = app().await;

    for uri in ["/api/calendar/chat", "/chat"] {
        let (status, body) = send(&app, post_json(uri, json!({"message": "hi"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"reply": "Hello, how can I help you!"}));
    }

    let (_, body) = send(&app, post_json("/chat", json!({"message": "exam"}))).await;
    assert!(body["reply"].as_str().unwrap().starts_with("🧪 Exam Dates:"));
}

#[tokio::test]
async fn test_admin_add_pair() {
    let repo = MockQaRepository::with_pairs(default_corpus());
    let app = app_with_token(&repo, None).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/admin/qa",
            json!({"question": "Is there a gym?", "answer": "Yes, near the ground."}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"ok": true, "total_pairs": default_corpus().len() + 1})
    );

    let (_, body) = send(&app, post_json("/api/chat", json!({"message": "is there a gym"}))).await;
    assert_eq!(body["source"], "exact");
    assert_eq!(body["reply"], "Yes, near the ground.");

    let (status, body) = send(
        &app,
        post_json(
            "/api/admin/qa",
            json!({"question": "IS THERE A GYM", "answer": "Duplicate"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["ok"], false);

    let (status, _) = send(
        &app,
        post_json("/api/admin/qa", json!({"question": " ", "answer": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_token_required_when_configured() {
    let repo = MockQaRepository::with_pairs(default_corpus());
    let app = app_with_token(&repo, Some("s3cret")).await;
    let pair = json!({"question": "Is there a gym?", "answer": "Yes"});

    let (status, body) = send(&app, post_json("/api/admin/qa", pair.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["ok"], false);

    let mut request = post_json("/api/admin/qa", pair.clone());
    request
        .headers_mut()
        .insert(ADMIN_TOKEN_HEADER, "wrong".parse().unwrap());
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(repo.get_call_count("append"), 0);

    let mut request = post_json("/api/admin/qa", pair);
    request
        .headers_mut()
        .insert(ADMIN_TOKEN_HEADER, "s3cret".parse().unwrap());
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(repo.get_call_count("append"), 1);
}

#[tokio::test]
async fn test_storage_failure_is_500() {
    let repo = MockQaRepository::with_pairs(default_corpus());
    let app = app_with_token(&repo, None).await;
    repo.fail_appends();

    let (status, body) = send(
        &app,
        post_json("/api/admin/qa", json!({"question": "Is there a gym?", "answer": "Yes"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn test_health_and_stats() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "pairs": default_corpus().len()}));

    send(&app, post_json("/api/chat", json!({"message": "thanks"}))).await;
    send(&app, post_json("/chat", json!({"message": "events"}))).await;

    let (status, body) = send(&app, get("/api/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messages_total"], 1);
    assert_eq!(body["replies_by_source"]["small_talk"], 1);
    assert_eq!(body["calendar_messages_total"], 1);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app().await;
    let (status, _) = send(&app, get("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
