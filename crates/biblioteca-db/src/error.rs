//! Database error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

impl DbError {
    /// Classify an error raised by a write against `livros`.
    ///
    /// Unique-constraint violations on `isbn` become [`DbError::Duplicate`];
    /// everything else is passed through unchanged.
    pub(crate) fn from_write(err: sqlx::Error, isbn: Option<&str>) -> Self {
        let unique = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());

        match (unique, isbn) {
            (true, Some(isbn)) => DbError::Duplicate(format!("isbn '{}' already registered", isbn)),
            (true, None) => DbError::Duplicate("isbn already registered".to_string()),
            (false, _) => DbError::Connection(err),
        }
    }
}
