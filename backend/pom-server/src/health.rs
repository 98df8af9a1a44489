use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with store status
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, overall, store) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "operational"),
        Err(e) => {
            log::warn!("Health check: store ping failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    let health = json!({
        "status": overall,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": store,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can the store serve requests?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check: store ping failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
