//! Shared handler state.

use std::sync::Arc;

use portal_config::PaginationConfig;
use portal_db::service::PortalService;

/// Cloned into every handler. The service is shared; each call opens its own connection.
#[derive(Clone)]
pub struct AppState {
    pub svc: Arc<PortalService>,
    pub paging: Arc<PaginationConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(svc: Arc<PortalService>, paging: PaginationConfig) -> Self {
        Self {
            svc,
            paging: Arc::new(paging),
        }
    }
}
