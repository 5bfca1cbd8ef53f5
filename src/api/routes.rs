//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_book, delete_book, get_book, health_handler, list_books, update_book, AppState,
};
use super::openapi::openapi_handler;

/// Creates the main router with all endpoints configured.
///
/// Static routes (`/health`, `/openapi.json`) take precedence over the
/// `/:book_id` capture.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", post(create_book).get(list_books))
        .route(
            "/:book_id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/health", get(health_handler))
        .route("/openapi.json", get(openapi_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
