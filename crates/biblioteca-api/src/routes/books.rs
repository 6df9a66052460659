//! Book CRUD routes

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use biblioteca_db::{AUTOR_MAX_LEN, Book, BookChanges, ISBN_MAX_LEN, NewBook, TITULO_MAX_LEN};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiJsonOrDefault, BookId};
use crate::state::AppState;

use super::types::{CreateBookRequest, UpdateBookRequest};

/// Base path of the book resource
pub const BASE_PATH: &str = "/api/livros";
const ITEM_PATH: &str = "/api/livros/{id}";

const MISSING_FIELDS_MESSAGE: &str =
    "Dados obrigatórios ausentes: título, autor, isbn e anoPublicacao são necessários.";

// ==================== Input Validation ====================

/// A required text field: present and not empty
fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validate a text field against its column width
fn validate_length(field: &str, value: &str, max: usize) -> Result<(), ApiError> {
    if value.chars().count() > max {
        return Err(ApiError::BadRequest(format!(
            "O campo {} excede o limite de {} caracteres.",
            field, max
        )));
    }
    Ok(())
}

/// Validate a replacement value on update: if given, it must be non-empty and fit
fn validate_change(field: &str, value: Option<&str>, max: usize) -> Result<(), ApiError> {
    match value {
        Some(v) if v.is_empty() => Err(ApiError::BadRequest(format!(
            "O campo {} não pode ser vazio.",
            field
        ))),
        Some(v) => validate_length(field, v, max),
        None => Ok(()),
    }
}

/// Check required fields and widths of a create request
fn validate_create(request: CreateBookRequest) -> Result<NewBook, ApiError> {
    let (Some(titulo), Some(autor), Some(isbn), Some(ano_publicacao)) = (
        required_text(request.titulo),
        required_text(request.autor),
        required_text(request.isbn),
        request.ano_publicacao.filter(|year| *year != 0),
    ) else {
        return Err(ApiError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()));
    };

    validate_length("titulo", &titulo, TITULO_MAX_LEN)?;
    validate_length("autor", &autor, AUTOR_MAX_LEN)?;
    validate_length("isbn", &isbn, ISBN_MAX_LEN)?;

    Ok(NewBook {
        titulo,
        autor,
        isbn,
        ano_publicacao,
        disponivel: request.disponivel.unwrap_or(true),
    })
}

/// Check the fields present in an update request
fn validate_update(request: UpdateBookRequest) -> Result<BookChanges, ApiError> {
    validate_change("titulo", request.titulo.as_deref(), TITULO_MAX_LEN)?;
    validate_change("autor", request.autor.as_deref(), AUTOR_MAX_LEN)?;
    validate_change("isbn", request.isbn.as_deref(), ISBN_MAX_LEN)?;
    if request.ano_publicacao == Some(0) {
        return Err(ApiError::BadRequest(
            "O campo anoPublicacao não pode ser zero.".to_string(),
        ));
    }

    Ok(BookChanges {
        titulo: request.titulo,
        autor: request.autor,
        isbn: request.isbn,
        ano_publicacao: request.ano_publicacao,
        disponivel: request.disponivel,
    })
}

// ==================== Book Routes ====================

/// POST /api/livros
async fn create_book(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = validate_create(request)?;

    debug!("Creating book: {} ({})", book.titulo, book.isbn);

    let book = state
        .db
        .insert_book(book)
        .await
        .map_err(ApiError::storage("Erro ao cadastrar o livro."))?;

    metrics::counter!("biblioteca_books_created_total").increment(1);
    info!("Created book {}: {}", book.id, book.titulo);

    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /api/livros
async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state
        .db
        .list_books()
        .await
        .map_err(ApiError::storage("Erro ao buscar a lista de livros."))?;

    Ok(Json(books))
}

/// GET /api/livros/{id}
async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<Book>, ApiError> {
    debug!("Fetching book: {}", id);

    let book = state
        .db
        .get_book(id)
        .await
        .map_err(ApiError::storage("Erro ao buscar o livro."))?
        .ok_or_else(|| ApiError::NotFound("Livro não encontrado.".to_string()))?;

    Ok(Json(book))
}

/// PUT /api/livros/{id}
async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    ApiJsonOrDefault(request): ApiJsonOrDefault<UpdateBookRequest>,
) -> Result<Json<Book>, ApiError> {
    let changes = validate_update(request)?;

    debug!("Updating book: {}", id);

    let book = state
        .db
        .patch_book(id, changes)
        .await
        .map_err(ApiError::storage("Erro ao atualizar o livro."))?
        .ok_or_else(|| ApiError::NotFound("Livro não encontrado para atualização.".to_string()))?;

    metrics::counter!("biblioteca_books_updated_total").increment(1);
    info!("Updated book {}", id);

    Ok(Json(book))
}

/// DELETE /api/livros/{id}
async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<StatusCode, ApiError> {
    debug!("Deleting book: {}", id);

    let deleted = state
        .db
        .delete_book(id)
        .await
        .map_err(ApiError::storage("Erro ao excluir o livro."))?;

    if deleted == 0 {
        return Err(ApiError::NotFound(
            "Livro não encontrado para exclusão.".to_string(),
        ));
    }

    metrics::counter!("biblioteca_books_deleted_total").increment(1);
    info!("Deleted book {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Create book routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(BASE_PATH, get(list_books).post(create_book))
        .route(ITEM_PATH, get(get_book).put(update_book).delete(delete_book))
}
