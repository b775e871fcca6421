//! Domain layer: what a link *is*, independent of storage or transport.
//!
//! [`entities`] holds the data shapes, [`repositories`] the storage contract
//! they travel through. Nothing in this layer imports axum or sqlx; the
//! concrete SQLite implementation lives in [`crate::infrastructure`] and the
//! rules that act on these types in [`crate::application::services`].

pub mod entities;
pub mod repositories;
