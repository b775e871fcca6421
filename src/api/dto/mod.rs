//! Wire shapes of the JSON API.
//!
//! Serde handles (de)serialization; request DTOs additionally carry
//! `validator` rules so handlers can reject malformed input up front.

pub mod health;
pub mod links;
