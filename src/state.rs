//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{LinkService, RedirectService};
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Handler-visible services, cheaply cloneable per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteLinkRepository>>,
}

impl AppState {
    /// Builds the service graph over a shared connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let repository = Arc::new(SqliteLinkRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            redirect_service: Arc::new(RedirectService::new(repository)),
        }
    }
}
