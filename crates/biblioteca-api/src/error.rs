//! API error types

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use biblioteca_db::DbError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Message returned for any path id that is not an integer
pub const INVALID_ID_MESSAGE: &str = "ID inválido.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Storage failure. `message` is what the client sees; `source` is only logged.
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Wrap a storage error with the client-facing message of the failing operation.
    ///
    /// ```ignore
    /// state.db.list_books().await.map_err(ApiError::storage("Erro ao buscar a lista de livros."))?;
    /// ```
    pub fn storage(message: &'static str) -> impl FnOnce(DbError) -> ApiError {
        move |source| ApiError::Storage { message, source }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!(
            "Corpo da requisição inválido: {}",
            rejection.body_text()
        ))
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::BadRequest(INVALID_ID_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Storage { message, source } => {
                error!("{} ({})", message, source);
                metrics::counter!("biblioteca_storage_errors_total").increment(1);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = axum::Json(json!({ "message": message }));

        (status, body).into_response()
    }
}
