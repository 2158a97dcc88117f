//! HTTP handlers for the Settings API
//!
//! Provides 3 REST endpoints:
//! - GET  /api/v1/settings/theme        — current theme
//! - PUT  /api/v1/settings/theme        — set theme
//! - POST /api/v1/settings/theme/toggle — flip theme

use crate::settings::store::SettingsStore;
use crate::settings::types::{ThemeResponse, UpdateThemeRequest};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

/// Shared state for settings handlers
#[derive(Clone)]
pub struct SettingsState {
    pub store: Arc<SettingsStore>,
}

/// Create the settings router
pub fn settings_router(state: SettingsState) -> Router {
    Router::new()
        .route("/api/v1/settings/theme", get(get_theme))
        .route("/api/v1/settings/theme", put(set_theme))
        .route("/api/v1/settings/theme/toggle", post(toggle_theme))
        .with_state(state)
}

/// GET /api/v1/settings/theme
async fn get_theme(State(state): State<SettingsState>) -> impl IntoResponse {
    Json(ThemeResponse {
        theme: state.store.theme().await,
    })
}

/// PUT /api/v1/settings/theme
async fn set_theme(
    State(state): State<SettingsState>,
    Json(request): Json<UpdateThemeRequest>,
) -> impl IntoResponse {
    Json(ThemeResponse {
        theme: state.store.set_theme(request.theme).await,
    })
}

/// POST /api/v1/settings/theme/toggle
async fn toggle_theme(State(state): State<SettingsState>) -> impl IntoResponse {
    Json(ThemeResponse {
        theme: state.store.toggle_theme().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::types::Theme;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn make_app() -> (Router, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(SettingsStore::new(dir.path().to_path_buf()).await.unwrap());
        (settings_router(SettingsState { store }), dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_default_theme() {
        let (app, _dir) = make_app().await;
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/settings/theme")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["theme"], "light");
    }

    #[tokio::test]
    async fn test_set_theme() {
        let (app, _dir) = make_app().await;
        let resp = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/settings/theme")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"theme":"dark"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["theme"], "dark");
    }

    #[tokio::test]
    async fn test_toggle_theme() {
        let (app, _dir) = make_app().await;
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/settings/theme/toggle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["theme"], Theme::Dark.to_string());
    }
}
