//! Storage contracts the domain exposes.
//!
//! [`LinkRepository`] is the single trait; its SQLite implementation lives
//! in `crate::infrastructure::persistence`, and `mockall` generates
//! `MockLinkRepository` for service unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
