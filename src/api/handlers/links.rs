//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "code": "mycode1"
/// }
/// ```
///
/// `code` is optional; when omitted, a random 6-character code is generated.
/// The destination is stored exactly as submitted (after trimming), without
/// normalization.
///
/// # Errors
///
/// - **400 Bad Request**: missing or unparseable URL, or a custom code that
///   is not 6-8 alphanumeric characters
/// - **409 Conflict**: the custom code is already taken
/// - **500 Internal Server Error**: generated codes kept colliding until the
///   retry budget ran out
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.url, payload.code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links, most recently created first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// Returns every stored link as a JSON array. There is no pagination;
/// clients filter or search locally.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns the full record for a single link.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// The row is removed outright; accumulated click history disappears with
/// it and the code becomes available for reuse. Subsequent redirects for
/// this code return 404.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
