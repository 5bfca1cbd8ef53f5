//! Catalog Module
//!
//! In-memory, insertion-ordered storage for book records.

mod seed;
mod store;


// Re-export public types
pub use seed::seed_books;
pub use store::BookStore;
