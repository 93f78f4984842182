use std::sync::Arc;

use crate::facade::DashboardService;
use crate::service::QueryService;
use crate::store::RecordStore;

/// Shared handler state. Holds the single store handle for the process,
/// wrapped in the services the handlers talk to.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardService,
    pub query: QueryService,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            dashboard: DashboardService::new(store.clone()),
            query: QueryService::new(store),
        }
    }
}
