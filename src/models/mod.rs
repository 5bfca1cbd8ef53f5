//! Request and Response models for the catalog server API
//!
//! `Book` doubles as the request body for create/replace; the remaining
//! types only shape outgoing responses.

pub mod book;
pub mod responses;

// Re-export commonly used types
pub use book::{Book, Genre};
pub use responses::{BooksResponse, ErrorResponse, HealthResponse};
