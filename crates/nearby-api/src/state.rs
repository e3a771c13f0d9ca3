use nearby_store::ports::RecordStore;
use std::sync::Arc;

/// Shared application state: the injected record store.
///
/// The store handle is safe for concurrent use; the uniqueness index inside
/// the store arbitrates conflicting inserts, so no locking happens here.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}
