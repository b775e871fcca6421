//! # tinylink
//!
//! A minimal URL shortening service built with Axum and SQLite.
//!
//! Submit a destination URL (optionally with a custom code) and get back a
//! short link; visiting the short link issues a 307 redirect and counts the
//! click. That is the whole service.
//!
//! ## Layout
//!
//! The crate keeps a strict layering, top to bottom:
//!
//! - [`api`] - routes, handlers, DTOs: everything that speaks HTTP
//! - [`application`] - [`LinkService`](application::services::LinkService)
//!   (code allocation, CRUD) and
//!   [`RedirectService`](application::services::RedirectService)
//!   (resolution + click accounting)
//! - [`domain`] - the `Link` entity and the `LinkRepository` storage contract
//! - [`infrastructure`] - the SQLite implementation of that contract
//!
//! [`config`], [`state`], [`routes`], and [`server`] wire the layers into a
//! running binary; [`error`] defines the one error type they all share.
//!
//! ## Running
//!
//! ```bash
//! # Optional; defaults to sqlite://tinylink.db
//! export DATABASE_URL="sqlite://tinylink.db"
//!
//! # Migrations run automatically on startup
//! cargo run
//! ```
//!
//! Configuration comes entirely from environment variables; see [`config`]
//! for the full list and defaults.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, RedirectService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
