//! Book Catalog - A small in-memory book catalog server
//!
//! Exposes create/list/fetch/replace/delete over REST, backed by an
//! insertion-ordered store.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use catalog::BookStore;
pub use config::Config;
pub use error::{CatalogError, Result};
