//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::catalog::BookStore;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::models::{Book, BooksResponse, HealthResponse};

/// Application state shared across all handlers.
///
/// Contains the book store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe book store
    pub catalog: Arc<RwLock<BookStore>>,
}

impl AppState {
    /// Creates a new AppState with the given book store.
    pub fn new(catalog: BookStore) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The store starts seeded unless the configuration disables it.
    pub fn from_config(config: &Config) -> Self {
        let catalog = if config.seed_catalog {
            BookStore::seeded()
        } else {
            BookStore::new()
        };
        Self::new(catalog)
    }
}

/// Handler for POST /
///
/// Stores a book under its id, overwriting any existing record.
#[utoipa::path(
    post,
    path = "/",
    tag = "books",
    operation_id = "create_book",
    request_body = Book,
    responses(
        (status = 201, description = "Book stored", body = Book),
        (status = 422, description = "Invalid book", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Book>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>)> {
    let Json(book) = payload?;

    let mut catalog = state.catalog.write().await;
    let stored = catalog.insert(book);
    info!(id = stored.id, "book created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Handler for GET /
///
/// Lists every book, keyed by id, in catalog order.
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    operation_id = "list_books",
    responses(
        (status = 200, description = "All books", body = BooksResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<BooksResponse> {
    let catalog = state.catalog.read().await;
    Json(BooksResponse::new(catalog.list().clone()))
}

/// Handler for GET /:book_id
#[utoipa::path(
    get,
    path = "/{book_id}",
    tag = "books",
    operation_id = "get_book",
    params(("book_id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Successful Response", body = Book),
        (status = 404, description = "Book not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    book_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Book>> {
    let Path(book_id) = book_id?;

    let catalog = state.catalog.read().await;
    catalog.get(book_id).map(Json).ok_or(CatalogError::NotFound)
}

/// Handler for PUT /:book_id
///
/// Replaces an existing book. Missing ids are reported, never created.
#[utoipa::path(
    put,
    path = "/{book_id}",
    tag = "books",
    operation_id = "update_book",
    params(("book_id" = i64, Path, description = "Book id")),
    request_body = Book,
    responses(
        (status = 200, description = "Successful Response", body = Book),
        (status = 404, description = "Book not found", body = crate::models::ErrorResponse),
        (status = 422, description = "Invalid book", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    book_id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<Book>, JsonRejection>,
) -> Result<Json<Book>> {
    let Path(book_id) = book_id?;
    let Json(book) = payload?;

    // Lookup and overwrite happen under one write lock
    let mut catalog = state.catalog.write().await;
    let updated = catalog
        .update(book_id, book)
        .ok_or(CatalogError::NotFound)?;
    info!(id = book_id, "book updated");

    Ok(Json(updated))
}

/// Handler for DELETE /:book_id
#[utoipa::path(
    delete,
    path = "/{book_id}",
    tag = "books",
    operation_id = "delete_book",
    params(("book_id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Successful Response"),
        (status = 404, description = "Book not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    book_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<StatusCode> {
    let Path(book_id) = book_id?;

    let mut catalog = state.catalog.write().await;
    if !catalog.contains(book_id) {
        return Err(CatalogError::NotFound);
    }
    catalog.delete(book_id);
    info!(id = book_id, "book deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
