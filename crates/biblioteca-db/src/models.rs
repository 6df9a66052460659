//! Database models

use serde::{Deserialize, Serialize};
use sqlx::Row;

/// Maximum length of `titulo`
pub const TITULO_MAX_LEN: usize = 150;
/// Maximum length of `autor`
pub const AUTOR_MAX_LEN: usize = 100;
/// Maximum length of `isbn`
pub const ISBN_MAX_LEN: usize = 20;

/// A persisted book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub ano_publicacao: i32,
    pub disponivel: bool,
}

/// A book that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub ano_publicacao: i32,
    pub disponivel: bool,
}

impl NewBook {
    /// Attach the storage-assigned id
    pub fn with_id(self, id: i64) -> Book {
        Book {
            id,
            titulo: self.titulo,
            autor: self.autor,
            isbn: self.isbn,
            ano_publicacao: self.ano_publicacao,
            disponivel: self.disponivel,
        }
    }
}

/// Partial update of a book. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookChanges {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub isbn: Option<String>,
    pub ano_publicacao: Option<i32>,
    pub disponivel: Option<bool>,
}

/// Input to [`crate::Database::save_book`]: stored records carry an id, new ones don't
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookRecord {
    New(NewBook),
    Existing(Book),
}

impl From<NewBook> for BookRecord {
    fn from(book: NewBook) -> Self {
        BookRecord::New(book)
    }
}

impl From<Book> for BookRecord {
    fn from(book: Book) -> Self {
        BookRecord::Existing(book)
    }
}

// ==================== TryFrom Implementations ====================

impl TryFrom<&sqlx::sqlite::SqliteRow> for Book {
    type Error = sqlx::Error;

    fn try_from(row: &sqlx::sqlite::SqliteRow) -> Result<Self, Self::Error> {
        Ok(Book {
            id: row.try_get("id")?,
            titulo: row.try_get("titulo")?,
            autor: row.try_get("autor")?,
            isbn: row.try_get("isbn")?,
            ano_publicacao: row.try_get("anoPublicacao")?,
            disponivel: row.try_get("disponivel")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: 1,
            titulo: "Dune".to_string(),
            autor: "Herbert".to_string(),
            isbn: "123".to_string(),
            ano_publicacao: 1965,
            disponivel: true,
        }
    }

    #[test]
    fn test_book_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample_book()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "titulo": "Dune",
                "autor": "Herbert",
                "isbn": "123",
                "anoPublicacao": 1965,
                "disponivel": true
            })
        );
    }

    #[test]
    fn test_new_book_with_id() {
        let book = NewBook {
            titulo: "Dune".to_string(),
            autor: "Herbert".to_string(),
            isbn: "123".to_string(),
            ano_publicacao: 1965,
            disponivel: true,
        }
        .with_id(1);
        assert_eq!(book, sample_book());
    }
}
