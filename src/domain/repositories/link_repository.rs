//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for managing short links.
///
/// Codes are compared exactly as stored: no trimming, no case folding.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link with zero clicks.
    ///
    /// The `code` column carries a unique index; that index, not any
    /// application-level lookup, is what guarantees uniqueness when two
    /// requests race for the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Permanently deletes a link.
    ///
    /// Returns `Ok(true)` if the link was found and deleted, `Ok(false)` if
    /// no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Records a visit: bumps the click counter by one and stamps the visit
    /// time, returning the destination URL.
    ///
    /// The increment is relative (`clicks = clicks + 1`) and runs in the
    /// same statement as the URL read, so concurrent visits to one code
    /// never lose updates.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` with the destination if the code exists
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn record_visit(
        &self,
        code: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<String>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
