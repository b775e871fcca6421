//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, health_handler,
    list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// API routes for link management and service health.
///
/// Mounted under `/api`, which keeps every static path out of the root
/// namespace where short codes live; no code can shadow an endpoint or
/// vice versa.
///
/// # Endpoints
///
/// - `GET    /links`         - List all links, newest first
/// - `POST   /links`         - Create a link (optional custom code)
/// - `GET    /links/{code}`  - Full record for one link
/// - `DELETE /links/{code}`  - Permanently delete a link
/// - `GET    /health`        - Component health checks
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/health", get(health_handler))
}
