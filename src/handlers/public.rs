use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::resources::RESOURCE_PATHS;
use crate::state::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let endpoints: Vec<String> = RESOURCE_PATHS.iter().map(|p| format!("/api/{}", p)).collect();

    Json(json!({
        "name": "Campus API",
        "version": version,
        "description": "CRUD backend for campus records",
        "endpoints": {
            "health": "/health (public)",
            "currentUser": "/api/currentUser (authenticated)",
            "resources": endpoints,
            "operations": [
                "GET /api/<resource>/all (USER)",
                "POST /api/<resource>/post (ADMIN)",
                "GET /api/<resource>?id= (USER)",
                "PUT /api/<resource>?id= (ADMIN)",
                "DELETE /api/<resource>?id= (ADMIN)",
            ],
        }
    }))
}

/// GET /health - storage ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let storage = state.storage.name();

    match state.storage.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "storage": storage,
            })),
        ),
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "storage": storage,
                    "error": "storage unavailable",
                })),
            )
        }
    }
}
