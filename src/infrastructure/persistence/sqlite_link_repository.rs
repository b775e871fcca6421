//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `links` table, kept separate from the domain entity.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    url: String,
    clicks: i64,
    last_clicked_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.code,
            row.url,
            row.clicks,
            row.last_clicked_at,
            row.created_at,
            row.updated_at,
        )
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Uses SQLx prepared statements with bound parameters. Timestamps are set
/// from Rust rather than by column defaults so they carry sub-second
/// precision.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, url, clicks, last_clicked_at, created_at, updated_at)
            VALUES (?, ?, 0, NULL, ?, ?)
            RETURNING id, code, url, clicks, last_clicked_at, created_at, updated_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.url)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, url, clicks, last_clicked_at, created_at, updated_at
            FROM links
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, url, clicks, last_clicked_at, created_at, updated_at
            FROM links
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_visit(
        &self,
        code: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<String>, AppError> {
        // Relative increment and URL read in one statement, so concurrent
        // visits to the same code serialize at the store and lose nothing.
        let url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked_at = ?, updated_at = ?
            WHERE code = ?
            RETURNING url
            "#,
        )
        .bind(at)
        .bind(at)
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
