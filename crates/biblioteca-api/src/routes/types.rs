//! Request DTOs for the book routes
//!
//! Only the declared columns are deserialized; `id` and any unknown keys in a
//! request body are ignored.

use serde::Deserialize;

/// Create book request. Fields are optional here so that missing ones produce
/// the validation message rather than a deserialization error.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub isbn: Option<String>,
    pub ano_publicacao: Option<i32>,
    pub disponivel: Option<bool>,
}

/// Update book request (partial)
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub isbn: Option<String>,
    pub ano_publicacao: Option<i32>,
    pub disponivel: Option<bool>,
}
