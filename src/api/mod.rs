//! HTTP boundary of the service.
//!
//! Everything that knows about requests, responses, and status codes lives
//! here; the layers below it speak entities and errors only.
//!
//! - [`dto`] - Request/response shapes and their validation rules
//! - [`handlers`] - One handler per endpoint, thin wrappers over the services
//! - [`middleware`] - Request observability
//! - [`routes`] - Composition of handlers into the `/api` router

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
