//! Domain entities.
//!
//! A single entity covers the whole model: [`Link`], the stored mapping
//! with its click accounting, and [`NewLink`], the allocated code/URL pair
//! ready for insertion.

pub mod link;

pub use link::{Link, NewLink};
