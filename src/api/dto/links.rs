//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination URL. Any absolute URL is accepted; the scheme is not
    /// restricted.
    ///
    /// Defaults to empty when absent so a missing field surfaces as a 400
    /// validation error instead of a deserialization rejection.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    /// Optional custom short code (6-8 alphanumeric characters).
    pub code: Option<String>,
}

/// Full representation of a stored link.
///
/// Timestamps and the click counter serialize in camelCase, matching the
/// public wire contract. `lastClickedAt` is always present and `null` until
/// the first visit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            last_clicked_at: link.last_clicked_at,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}
