//! Route table for the local API.

use axum::{
    Router,
    routing::{delete, get, put},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::{AppState, api};

/// Creates the axum router with all routes.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    let ui = ServeDir::new(state.ui_dir());

    Router::new()
        // --- Liveness ---
        .route("/test", get(status_handler))
        // --- Env editing ---
        .route("/api/env", get(api::env::get_env).put(api::env::save_env))
        // --- SSL ---
        .route("/api/ssl/upload", put(api::ssl::upload))
        .route("/api/ssl/delete", delete(api::ssl::delete))
        .route("/api/ssl/status", get(api::ssl::status))
        // --- Static UI ---
        .fallback_service(ui)
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "message": "envedit .env editor is running"
    }))
}
