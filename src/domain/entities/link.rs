//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click accounting.
///
/// Maps a unique short code to a destination URL. The destination is stored
/// exactly as submitted (after trimming); no normalization is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        code: String,
        url: String,
        clicks: i64,
        last_clicked_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            url,
            clicks,
            last_clicked_at,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the link has never been resolved.
    ///
    /// Holds exactly when `last_clicked_at` is unset; the two fields only
    /// ever change together.
    pub fn never_visited(&self) -> bool {
        self.clicks == 0
    }
}

/// Input data for creating a new link: an allocated code plus its
/// destination.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            now,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc123");
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert!(link.last_clicked_at.is_none());
        assert_eq!(link.created_at, now);
        assert_eq!(link.updated_at, now);
        assert!(link.never_visited());
    }

    #[test]
    fn test_link_with_clicks() {
        let now = Utc::now();
        let link = Link::new(
            5,
            "zZzZ99".to_string(),
            "ftp://files.example.com/archive.tar.gz".to_string(),
            12,
            Some(now),
            now,
            now,
        );

        assert_eq!(link.clicks, 12);
        assert_eq!(link.last_clicked_at, Some(now));
        assert!(!link.never_visited());
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            code: "xyz789".to_string(),
            url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.code, "xyz789");
        assert_eq!(new_link.url, "https://rust-lang.org");
    }
}
