//! Preview router using Axum
//!
//! Serves the server-rendered header for any path so the markup can be
//! inspected without building the WASM bundle.

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    routing::get,
    Json, Router,
};
use dashhead_core::{HeaderConfig, HeaderContext, RouteLabel};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::render::{render_page, RenderOptions};

/// Immutable state shared by every request
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    pub context: HeaderContext,
    pub config: HeaderConfig,
}

/// Create the preview router
pub fn create_router(state: Arc<PreviewState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/labels", get(labels_handler))
        .route("/", get(page_handler))
        .route("/{*path}", get(page_handler))
        .layer(cors)
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn labels_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "labels": RouteLabel::table()
            .iter()
            .map(|(segment, label)| serde_json::json!({
                "segment": segment,
                "label": label.as_str(),
            }))
            .collect::<Vec<_>>(),
        "default": RouteLabel::DEFAULT.as_str(),
    }))
}

async fn page_handler(
    State(state): State<Arc<PreviewState>>,
    Query(options): Query<RenderOptions>,
    uri: Uri,
) -> Html<String> {
    Html(render_page(uri.path(), options, &state.context, &state.config))
}
