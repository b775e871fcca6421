//! Middleware applied around the routers.
//!
//! Only [`tracing`] at the moment: per-request spans and response logging.

pub mod tracing;
