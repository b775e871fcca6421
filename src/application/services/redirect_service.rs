//! Redirect resolution with click accounting.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service resolving short codes to destinations while recording the visit.
pub struct RedirectService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves `code` to its destination URL, bumping the click counter and
    /// the last-clicked timestamp in the same store round-trip.
    ///
    /// Every resolution hits the store; destinations are never cached. The
    /// code must match exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve_and_record(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .record_visit(code, Utc::now())
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }
}
