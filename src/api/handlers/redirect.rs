//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code with a fresh store lookup (destinations are never
///    cached)
/// 2. Atomically bump `clicks` and stamp `lastClickedAt` in the same
///    statement
/// 3. Return 307 Temporary Redirect to the destination
///
/// The code must match exactly as stored; lookups are case-sensitive.
///
/// # Errors
///
/// Returns 404 Not Found with a JSON body naming the missing code, so a
/// visitor gets a specific outcome rather than a generic error page.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.redirect_service.resolve_and_record(&code).await?;

    debug!(%code, "redirecting visit");

    Ok(Redirect::temporary(&url))
}
