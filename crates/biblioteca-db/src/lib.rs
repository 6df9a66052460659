//! Biblioteca Database Layer
//!
//! This crate provides the persistence layer for the book catalogue,
//! using SQLite via sqlx.

pub mod error;
pub mod models;
pub mod repository;

pub use error::DbError;
pub use models::*;
pub use repository::Database;
