//! Infrastructure layer: concrete backends for the domain's traits.
//!
//! Currently just [`persistence`], the SQLite storage backing
//! [`crate::domain::repositories::LinkRepository`].

pub mod persistence;
