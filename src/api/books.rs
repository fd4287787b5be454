//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, CreateBookManual},
    AppState,
};

/// Response for a successful deletion
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_book: Book,
}

/// List all books in the catalog
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All catalog entries in insertion order", body = [Book])
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.library.list_all().await)
}

/// Add a book by ISBN, enriched through Open Library
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid ISBN"),
        (status = 404, description = "No bibliographic record for this ISBN"),
        (status = 409, description = "Book already exists"),
        (status = 502, description = "Bibliographic service failure"),
        (status = 504, description = "Bibliographic service timeout")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let book = state.services.library.add_by_isbn(&payload.isbn).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Add a book with caller-provided metadata (no external lookup)
#[utoipa::path(
    post,
    path = "/books/manual",
    tag = "books",
    request_body = CreateBookManual,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Book already exists")
    )
)]
pub async fn create_book_manual(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookManual>,
) -> AppResult<(StatusCode, Json<Book>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let book = state
        .services
        .library
        .add_manual(&payload.title, &payload.author, &payload.isbn)
        .await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "ISBN; hyphens and spaces allowed")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state
        .services
        .library
        .find_by_isbn(&isbn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No book with ISBN {}", isbn)))?;

    Ok(Json(book))
}

/// Delete a book by ISBN
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "ISBN; hyphens and spaces allowed")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeleteResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let book = state
        .services
        .library
        .remove_by_isbn(&isbn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No book with ISBN {}", isbn)))?;

    Ok(Json(DeleteResponse {
        message: "Book deleted".to_string(),
        deleted_book: book,
    }))
}
