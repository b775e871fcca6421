//! Link creation, retrieval, and deletion service.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{GENERATED_CODE_LEN, generate_code, normalize_custom_code};

/// Insert attempts for generated codes before giving up.
///
/// With 62^6 possible codes a collision is already rare; five retries make
/// the failure probability negligible while still bounding the worst case.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating, listing, and deleting shortened links.
///
/// Destinations are stored exactly as submitted (after trimming); codes are
/// either caller-chosen or generated on the spot.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - The destination URL; any scheme `Url::parse` accepts is fine
    /// - `custom_code` - Optional custom short code (validated if provided)
    ///
    /// # Code Allocation
    ///
    /// With a custom code, a fail-fast lookup rejects taken codes before the
    /// insert; the unique index on `code` remains the authoritative guard if
    /// a concurrent request wins the race in between.
    ///
    /// Without one, a 6-character code is generated and inserted directly,
    /// retrying on collision up to [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is
    /// malformed, [`AppError::Conflict`] if the custom code is taken, and
    /// [`AppError::AllocationExhausted`] if generated codes kept colliding.
    pub async fn create_link(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let url = validate_url(&url)?;

        if let Some(custom) = custom_code {
            let code = normalize_custom_code(&custom)?;

            if self.repository.find_by_code(&code).await?.is_some() {
                return Err(AppError::conflict(
                    "Code already exists",
                    json!({ "code": code }),
                ));
            }

            let new_link = NewLink {
                code: code.clone(),
                url,
            };

            return match self.repository.create(new_link).await {
                Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                    "Code already exists",
                    json!({ "code": code }),
                )),
                result => result,
            };
        }

        self.create_with_generated_code(url).await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists all links, most recently created first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.repository.delete(code).await? {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Counts stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Allocates a generated code by inserting directly and retrying on
    /// collision.
    ///
    /// There is deliberately no pre-insert lookup here: the insert itself is
    /// the collision check, so two concurrent requests generating the same
    /// code resolve at the unique index instead of both passing a stale
    /// lookup.
    async fn create_with_generated_code(&self, url: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(GENERATED_CODE_LEN),
                url: url.clone(),
            };

            match self.repository.create(new_link).await {
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "generated code collided, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::allocation_exhausted(
            "Failed to allocate a unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

/// Validates the destination URL, returning it trimmed.
///
/// Any scheme `Url::parse` accepts is allowed; the parsed form is used only
/// as a gate, and the trimmed input is what gets stored.
fn validate_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "URL is required",
            json!({ "field": "url" }),
        ));
    }

    Url::parse(trimmed).map_err(|e| {
        AppError::bad_request("Invalid URL", json!({ "url": input, "reason": e.to_string() }))
    })?;

    Ok(trimmed.to_string())
}
