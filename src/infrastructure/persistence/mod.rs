//! SQLite-backed storage.
//!
//! [`SqliteLinkRepository`] implements the domain's `LinkRepository` trait
//! with sqlx prepared statements over a shared connection pool.

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
