//! Storage adapters for the application layer

use std::sync::Arc;

use haulage_domain::StorageClient;
use haulage_store::MemoryStorage;

/// Open a fresh in-memory storage facade.
///
/// Each call returns an independent, empty instance.
pub fn open_memory_storage() -> Arc<dyn StorageClient> {
    Arc::new(MemoryStorage::new())
}
