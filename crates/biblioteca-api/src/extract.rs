//! Request extractors that reject with [`ApiError`] instead of axum's defaults

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, INVALID_ID_MESSAGE};

/// JSON body extractor; malformed bodies become a 400 with a JSON message
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// JSON body extractor where an empty body means `T::default()`
pub struct ApiJsonOrDefault<T>(pub T);

impl<T, S> FromRequest<S> for ApiJsonOrDefault<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if bytes.is_empty() {
            return Ok(ApiJsonOrDefault(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(ApiJsonOrDefault(value))
    }
}

/// `{id}` path segment read as a leading integer (`"12abc"` is 12).
/// A segment with no leading digits is a 400 "ID inválido."
#[derive(Debug)]
pub struct BookId(pub i64);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        parse_leading_int(&raw)
            .map(BookId)
            .ok_or_else(|| ApiError::BadRequest(INVALID_ID_MESSAGE.to_string()))
    }
}

/// Parse an optional sign followed by digits at the start of `raw`,
/// ignoring leading whitespace and anything after the digits.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    if digits.is_empty() {
        return None;
    }

    trimmed[..sign_len + digits.len()].parse().ok()
}
