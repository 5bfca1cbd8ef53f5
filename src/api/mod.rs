//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `POST /` - Store a book
//! - `GET /` - List all books
//! - `GET /:book_id` - Fetch a book
//! - `PUT /:book_id` - Replace a book
//! - `DELETE /:book_id` - Delete a book
//! - `GET /health` - Health check endpoint
//! - `GET /openapi.json` - OpenAPI document

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::*;
pub use openapi::ApiDoc;
pub use routes::create_router;
