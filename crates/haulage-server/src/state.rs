//! Application state shared across handlers.

use std::sync::Arc;

use haulage_app::FleetService;
use haulage_domain::StorageClient;

/// Handles to the storage facade and the use-case layer built on it.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StorageClient>,
    pub fleet: Arc<FleetService>,
}

impl AppState {
    pub fn new(storage: Arc<dyn StorageClient>) -> Self {
        let fleet = Arc::new(FleetService::new(Arc::clone(&storage)));
        Self { storage, fleet }
    }
}
