//! Book operations

use sqlx::Row;

use crate::error::DbError;
use crate::models::{Book, BookChanges, BookRecord, NewBook};
use crate::repository::Database;

impl Database {
    // ==================== Book Operations ====================

    /// Insert a new book, returning it with the generated id
    pub async fn insert_book(&self, book: NewBook) -> Result<Book, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO livros (titulo, autor, isbn, anoPublicacao, disponivel)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&book.titulo)
        .bind(&book.autor)
        .bind(&book.isbn)
        .bind(book.ano_publicacao)
        .bind(book.disponivel)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, Some(&book.isbn)))?;

        let id: i64 = result.get("id");
        Ok(book.with_id(id))
    }

    /// Insert a new record or overwrite an existing one
    pub async fn save_book(&self, record: BookRecord) -> Result<Book, DbError> {
        match record {
            BookRecord::New(book) => self.insert_book(book).await,
            BookRecord::Existing(book) => {
                let id = book.id;
                self.update_book(&book)
                    .await?
                    .ok_or_else(|| DbError::NotFound(format!("livro {}", id)))
            }
        }
    }

    /// List all books in insertion order
    pub async fn list_books(&self) -> Result<Vec<Book>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, titulo, autor, isbn, anoPublicacao, disponivel
            FROM livros
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| Book::try_from(row).map_err(DbError::from))
            .collect()
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: i64) -> Result<Option<Book>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, titulo, autor, isbn, anoPublicacao, disponivel
            FROM livros
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| Book::try_from(&row).map_err(DbError::from)).transpose()
    }

    /// Overwrite every mutable column of an existing book.
    ///
    /// Returns `None` if no row has the book's id.
    pub async fn update_book(&self, book: &Book) -> Result<Option<Book>, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE livros
            SET titulo = ?, autor = ?, isbn = ?, anoPublicacao = ?, disponivel = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.titulo)
        .bind(&book.autor)
        .bind(&book.isbn)
        .bind(book.ano_publicacao)
        .bind(book.disponivel)
        .bind(book.id)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, Some(&book.isbn)))?;

        Ok((result.rows_affected() > 0).then(|| book.clone()))
    }

    /// Merge `changes` into the stored book in a single statement.
    ///
    /// Returns the updated book, or `None` if the id does not exist.
    pub async fn patch_book(&self, id: i64, changes: BookChanges) -> Result<Option<Book>, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE livros
            SET titulo = COALESCE(?, titulo),
                autor = COALESCE(?, autor),
                isbn = COALESCE(?, isbn),
                anoPublicacao = COALESCE(?, anoPublicacao),
                disponivel = COALESCE(?, disponivel)
            WHERE id = ?
            RETURNING id, titulo, autor, isbn, anoPublicacao, disponivel
            "#,
        )
        .bind(changes.titulo.as_deref())
        .bind(changes.autor.as_deref())
        .bind(changes.isbn.as_deref())
        .bind(changes.ano_publicacao)
        .bind(changes.disponivel)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, changes.isbn.as_deref()))?;

        result.map(|row| Book::try_from(&row).map_err(DbError::from)).transpose()
    }

    /// Delete a book, returning the number of rows removed (0 or 1)
    pub async fn delete_book(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM livros WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Count stored books
    pub async fn count_books(&self) -> Result<i64, DbError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM livros")
            .fetch_one(&self.pool)
            .await?;
        Ok(result.get("count"))
    }
}
