//! Response DTOs for the catalog server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use super::Book;

/// Response body for the list operation (GET /)
///
/// Serializes as a JSON object keyed by the stringified book id, in
/// catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BooksResponse(#[schema(value_type = std::collections::HashMap<String, Book>)] pub IndexMap<i64, Book>);

impl BooksResponse {
    /// Creates a new BooksResponse from a snapshot of the catalog
    pub fn new(books: IndexMap<i64, Book>) -> Self {
        Self(books)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({"detail": "Book not found"}))]
pub struct ErrorResponse {
    /// What went wrong
    pub detail: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;

    #[test]
    fn test_books_response_keys_are_strings_in_order() {
        let mut books = IndexMap::new();
        books.insert(10, Book::new(10, "Emma", "Jane Austen", 1815, Genre::Romance));
        books.insert(2, Book::new(2, "Rebecca", "Daphne du Maurier", 1938, Genre::Mystery));

        let resp = BooksResponse::new(books);
        assert_eq!(resp.len(), 2);

        let json = serde_json::to_string(&resp).unwrap();
        let ten = json.find("\"10\":").unwrap();
        let two = json.find("\"2\":").unwrap();
        assert!(ten < two, "insertion order must survive serialization");
    }

    #[test]
    fn test_empty_books_response() {
        let resp = BooksResponse::default();
        assert!(resp.is_empty());
        assert_eq!(resp.len(), 0);
        assert_eq!(serde_json::to_string(&resp).unwrap(), "{}");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Book not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"detail":"Book not found"}"#);
    }
}
