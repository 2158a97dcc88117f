//! HTTP handlers for the Memories API
//!
//! Provides the REST endpoints for capture and retrieval:
//! - GET    /api/v1/memories              — filtered search (`?q=&type=`)
//! - POST   /api/v1/memories              — capture with an explicit kind
//! - POST   /api/v1/memories/quick        — quick capture with URL detection
//! - GET    /api/v1/memories/stats        — aggregate statistics
//! - GET    /api/v1/memories/:id          — single memory
//! - PATCH  /api/v1/memories/:id          — partial update
//! - DELETE /api/v1/memories/:id          — remove
//! - POST   /api/v1/memories/:id/favorite — toggle favorite

use crate::api::ApiError;
use crate::error::Error;
use crate::memory::store::MemoryStore;
use crate::memory::types::{CaptureInput, MemoryPatch, TypeFilter};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Shared state for memory handlers
#[derive(Clone)]
pub struct MemoriesState {
    pub store: Arc<MemoryStore>,
}

/// Create the memories router with all REST endpoints
pub fn memories_router(state: MemoriesState) -> Router {
    Router::new()
        .route("/api/v1/memories", get(search_memories))
        .route("/api/v1/memories", post(capture_memory))
        .route("/api/v1/memories/quick", post(quick_capture))
        .route("/api/v1/memories/stats", get(get_stats))
        .route("/api/v1/memories/:id", get(get_memory))
        .route("/api/v1/memories/:id", patch(update_memory))
        .route("/api/v1/memories/:id", delete(delete_memory))
        .route("/api/v1/memories/:id/favorite", post(toggle_favorite))
        .with_state(state)
}

// =============================================================================
// Query and request types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: Option<String>,
    #[serde(rename = "type")]
    type_filter: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuickCaptureRequest {
    text: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/memories
async fn search_memories(
    State(state): State<MemoriesState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let filter = match params.type_filter.as_deref() {
        None => TypeFilter::All,
        Some(raw) => match raw.parse() {
            Ok(filter) => filter,
            Err(message) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::to_value(ApiError::bad_request(message)).unwrap_or_default()),
                );
            }
        },
    };

    let results = state
        .store
        .search(params.q.as_deref().unwrap_or(""), filter)
        .await;
    (
        StatusCode::OK,
        Json(serde_json::to_value(results).unwrap_or_default()),
    )
}

/// POST /api/v1/memories
async fn capture_memory(
    State(state): State<MemoriesState>,
    Json(input): Json<CaptureInput>,
) -> impl IntoResponse {
    create_response(state.store.create(input).await)
}

/// POST /api/v1/memories/quick
async fn quick_capture(
    State(state): State<MemoriesState>,
    Json(request): Json<QuickCaptureRequest>,
) -> impl IntoResponse {
    let input = CaptureInput::quick(request.text);
    create_response(state.store.create(input).await)
}

fn create_response(result: crate::error::Result<crate::memory::Memory>) -> (StatusCode, Json<serde_json::Value>) {
    match result {
        Ok(memory) => (
            StatusCode::CREATED,
            Json(serde_json::to_value(memory).unwrap_or_default()),
        ),
        Err(Error::Capture(message)) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::to_value(ApiError::bad_request(message)).unwrap_or_default()),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::to_value(ApiError::internal(e.to_string())).unwrap_or_default()),
        ),
    }
}

/// GET /api/v1/memories/stats
async fn get_stats(State(state): State<MemoriesState>) -> impl IntoResponse {
    Json(state.store.stats().await)
}

/// GET /api/v1/memories/:id
async fn get_memory(
    State(state): State<MemoriesState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.get(&id).await {
        Some(memory) => (
            StatusCode::OK,
            Json(serde_json::to_value(memory).unwrap_or_default()),
        ),
        None => not_found(&id),
    }
}

/// PATCH /api/v1/memories/:id
async fn update_memory(
    State(state): State<MemoriesState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<MemoryPatch>,
) -> impl IntoResponse {
    match state.store.update(&id, patch).await {
        Some(memory) => (
            StatusCode::OK,
            Json(serde_json::to_value(memory).unwrap_or_default()),
        ),
        None => not_found(&id),
    }
}

/// DELETE /api/v1/memories/:id
async fn delete_memory(
    State(state): State<MemoriesState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.delete(&id).await {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(&id).into_response(),
    }
}

/// POST /api/v1/memories/:id/favorite
async fn toggle_favorite(
    State(state): State<MemoriesState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.toggle_favorite(&id).await {
        Some(memory) => (
            StatusCode::OK,
            Json(serde_json::to_value(memory).unwrap_or_default()),
        ),
        None => not_found(&id),
    }
}

fn not_found(id: &Uuid) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(
            serde_json::to_value(ApiError::not_found(format!("Memory {} not found", id)))
                .unwrap_or_default(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::HeuristicClassifier;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::ServiceExt;

    fn make_app() -> Router {
        let classifier = Arc::new(HeuristicClassifier::with_latency(Duration::ZERO).unwrap());
        let store = Arc::new(MemoryStore::new(classifier));
        memories_router(MemoriesState { store })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_empty_store() {
        let app = make_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/memories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_capture_and_get() {
        let app = make_app();

        let create_body = serde_json::json!({
            "type": "url",
            "originalUrl": "https://x.com",
            "content": "https://x.com",
            "source": "test"
        });
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/memories", create_body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created = body_json(resp).await;
        assert_eq!(created["type"], "url");
        assert_eq!(created["originalUrl"], "https://x.com");
        assert!(created["tags"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("Article")));
        assert_eq!(created["isFavorite"], false);
        assert_eq!(created["accessCount"], 0);

        let id = created["id"].as_str().unwrap();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/memories/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_capture_blank_content_rejected() {
        let app = make_app();
        let resp = app
            .oneshot(json_request(
                "POST",
                "/api/v1/memories",
                serde_json::json!({ "type": "text", "content": "   ", "source": "test" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_quick_capture_detects_url() {
        let app = make_app();
        let resp = app
            .oneshot(json_request(
                "POST",
                "/api/v1/memories/quick",
                serde_json::json!({ "text": "https://example.com/post" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = body_json(resp).await;
        assert_eq!(json["type"], "url");
        assert_eq!(json["source"], "quick-capture");
    }

    #[tokio::test]
    async fn test_get_missing_returns_404() {
        let app = make_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/memories/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_favorite_toggle_round_trip() {
        let app = make_app();
        let created = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/v1/memories",
                    serde_json::json!({ "type": "text", "content": "note", "source": "test" }),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/memories/{}/favorite", id),
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["isFavorite"], true);

        let resp = app
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/memories/{}/favorite", id),
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["isFavorite"], false);
    }

    #[tokio::test]
    async fn test_search_with_type_filter() {
        let app = make_app();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/memories",
                serde_json::json!({ "type": "text", "content": "plain note", "source": "test" }),
            ))
            .await
            .unwrap();

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/memories?type=url")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 0);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/memories?type=text&q=plain")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let app = make_app();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/memories",
                serde_json::json!({ "type": "text", "content": "note", "source": "test" }),
            ))
            .await
            .unwrap();

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/memories/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["total"], 1);
    }

    #[tokio::test]
    async fn test_delete_memory() {
        let app = make_app();
        let created = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/v1/memories",
                    serde_json::json!({ "type": "text", "content": "note", "source": "test" }),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/memories/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/memories/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
