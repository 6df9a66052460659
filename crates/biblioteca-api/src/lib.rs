//! Biblioteca REST API
//!
//! This crate provides the Axum-based HTTP API for the book catalogue:
//! CRUD routes under `/api/livros` plus health and metrics endpoints.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, BASE_PATH};
pub use state::{AppState, MetricsHandle};
