//! Application layer: the business rules between HTTP and storage.
//!
//! Services here own validation, code allocation, and click accounting;
//! they consume the repository trait and know nothing about axum or SQL.
//!
//! - [`services::LinkService`] - Creation, listing, detail, deletion
//! - [`services::RedirectService`] - Resolution with click accounting

pub mod services;
