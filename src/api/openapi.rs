//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::handlers;
use crate::models::{Book, BooksResponse, ErrorResponse, Genre, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Catalog API",
        description = "In-memory book catalog REST API"
    ),
    paths(
        handlers::create_book,
        handlers::list_books,
        handlers::get_book,
        handlers::update_book,
        handlers::delete_book,
        handlers::health_handler,
    ),
    components(schemas(Book, Genre, BooksResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "books", description = "Catalog CRUD"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Handler for GET /openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_book_operations() {
        let json = ApiDoc::openapi().to_json().unwrap();
        for op in ["create_book", "list_books", "get_book", "update_book", "delete_book"] {
            assert!(json.contains(op), "missing operation {op}");
        }
        assert!(json.contains("Science Fiction"));
    }
}
