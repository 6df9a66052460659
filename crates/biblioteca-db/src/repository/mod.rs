//! Database repository implementation

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbError;

mod books;

/// Database connection and operations
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection
    pub async fn new(database_url: &str) -> Result<Self, DbError> {
        info!("Connecting to database: {}", database_url);

        let pool = SqlitePool::connect(database_url).await?;
        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), DbError> {
        info!("Running database migrations");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS livros (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                titulo VARCHAR(150) NOT NULL,
                autor VARCHAR(100) NOT NULL,
                isbn VARCHAR(20) NOT NULL UNIQUE,
                anoPublicacao INTEGER NOT NULL,
                disponivel BOOLEAN NOT NULL DEFAULT 1
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::Migration(format!("failed to create table livros: {}", e)))?;

        info!("Database migrations completed");
        Ok(())
    }

    /// Close the pool; later queries fail with a connection error
    pub async fn close(&self) {
        self.pool.close().await;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::temp_database;
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let (_dir, db) = temp_database().await;

        // Re-running against an existing schema must not fail
        db.run_migrations().await.unwrap();
        assert_eq!(db.count_books().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_database_fails() {
        let result = Database::new("sqlite:/nonexistent-dir/biblioteca/db.sqlite").await;
        assert!(matches!(result, Err(DbError::Connection(_))));
    }

    #[tokio::test]
    async fn test_queries_fail_after_close() {
        let (_dir, db) = temp_database().await;
        db.close().await;

        assert!(matches!(db.count_books().await, Err(DbError::Connection(_))));
    }
}
