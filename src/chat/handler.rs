//! HTTP handlers for the chat mockup
//!
//! Provides 2 REST endpoints:
//! - POST /api/v1/chat/message  — canned reply for a user message
//! - GET  /api/v1/chat/greeting — conversation-start greeting

use crate::api::ApiError;
use crate::chat::render::{parse_blocks, render_html, Block};
use crate::chat::responder::ChatResponder;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for chat handlers
#[derive(Clone)]
pub struct ChatState {
    pub responder: Arc<ChatResponder>,
}

/// Create the chat router
pub fn chat_router(state: ChatState) -> Router {
    Router::new()
        .route("/api/v1/chat/message", post(send_message))
        .route("/api/v1/chat/greeting", get(get_greeting))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SendMessageRequest {
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatReply {
    reply: String,
    blocks: Vec<Block>,
    html: String,
}

impl ChatReply {
    fn from_text(text: &str) -> Self {
        let blocks = parse_blocks(text);
        let html = render_html(&blocks);
        Self {
            reply: text.to_string(),
            blocks,
            html,
        }
    }
}

/// POST /api/v1/chat/message
async fn send_message(
    State(state): State<ChatState>,
    Json(request): Json<SendMessageRequest>,
) -> impl IntoResponse {
    if request.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(
                serde_json::to_value(ApiError::bad_request("message is empty"))
                    .unwrap_or_default(),
            ),
        );
    }

    let reply = state.responder.respond(&request.message).await;
    (
        StatusCode::OK,
        Json(serde_json::to_value(ChatReply::from_text(reply)).unwrap_or_default()),
    )
}

/// GET /api/v1/chat/greeting
async fn get_greeting(State(state): State<ChatState>) -> impl IntoResponse {
    Json(ChatReply::from_text(state.responder.greeting()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::ServiceExt;

    fn make_app() -> Router {
        let responder = Arc::new(
            ChatResponder::new()
                .with_seed(9)
                .with_latency(Duration::ZERO, Duration::ZERO),
        );
        chat_router(ChatState { responder })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_send_message_returns_rendered_reply() {
        let app = make_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat/message")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message":"how do I center a div?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert!(!json["reply"].as_str().unwrap().is_empty());
        assert!(!json["blocks"].as_array().unwrap().is_empty());
        assert!(!json["html"].as_str().unwrap().contains("<script>"));
    }

    #[tokio::test]
    async fn test_send_empty_message_rejected() {
        let app = make_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat/message")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message":"   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_greeting() {
        let app = make_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/chat/greeting")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert!(json["reply"].as_str().unwrap().contains("pair programmer"));
        assert_eq!(json["blocks"].as_array().unwrap().len(), 2);
    }
}
