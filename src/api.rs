//! Unified API router for MemoMemo
//!
//! Merges all module routers into a single axum `Router` with CORS, request
//! tracing, and a root health probe.
//!
//! ## Endpoint Map
//!
//! | Prefix                   | Module   | Description                        |
//! |--------------------------|----------|------------------------------------|
//! | `/health`                | api      | Load balancer health probe         |
//! | `/api/v1/memories/*`     | memory   | Capture, search, update, favorite  |
//! | `/api/v1/chat/*`         | chat     | Canned replies, greeting           |
//! | `/api/v1/settings/*`     | settings | Theme flag                         |

use crate::chat::{chat_router, ChatState};
use crate::memory::{memories_router, MemoriesState};
use crate::settings::{settings_router, SettingsState};
use axum::{
    http::{header, header::HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// API error response envelope
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

/// API error detail
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "BAD_REQUEST".to_string(),
                message: message.into(),
            },
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "INTERNAL".to_string(),
                message: message.into(),
            },
        }
    }
}

/// Build the complete MemoMemo HTTP application.
///
/// Merges all module routers, adds CORS and tracing middleware, and returns
/// a single `Router` ready to be served by `axum::serve`.
pub fn build_app(
    memories_state: MemoriesState,
    chat_state: ChatState,
    settings_state: SettingsState,
    cors_origins: &[String],
) -> Router {
    let cors = build_cors(cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(memories_router(memories_state))
        .merge(chat_router(chat_state))
        .merge(settings_router(settings_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(parsed)
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
