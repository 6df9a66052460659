//! Health check endpoints

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health status response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<i64>,
}

/// Health check handler; also verifies the database answers
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    metrics::counter!("biblioteca_health_checks_total").increment(1);

    let version = env!("CARGO_PKG_VERSION").to_string();
    match state.db.count_books().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                version,
                books: Some(count),
            }),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    version,
                    books: None,
                }),
            )
        }
    }
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
}
