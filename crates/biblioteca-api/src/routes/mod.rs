//! API routes

mod books;
mod health;
mod types;

use axum::{Router, extract::State, routing::get};
use std::sync::Arc;

use crate::state::{AppState, MetricsHandle};

pub use books::BASE_PATH;

/// GET /metrics - Prometheus text exposition
async fn render_metrics(State(handle): State<Arc<MetricsHandle>>) -> String {
    handle.render()
}

/// Create the main router
pub fn create_router(state: AppState, metrics_handle: Option<Arc<MetricsHandle>>) -> Router {
    let router = Router::new()
        .merge(health::routes())
        .merge(books::routes())
        .with_state(state);

    match metrics_handle {
        Some(handle) => router.merge(
            Router::new()
                .route("/metrics", get(render_metrics))
                .with_state(handle),
        ),
        None => router,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use biblioteca_db::Database;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::create_router;
    use crate::state::AppState;

    /// Fresh database in a temporary directory that must outlive it
    pub async fn temp_db() -> (TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("api.sqlite").display());
        let db = Database::new(&url).await.unwrap();
        (dir, db)
    }

    /// Router over a fresh temporary database, without metrics
    pub async fn test_app() -> (TempDir, Router) {
        let (dir, db) = temp_db().await;
        (dir, create_router(AppState::new(db), None))
    }

    /// Send one request and decode the JSON response (`Null` for empty bodies)
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}
