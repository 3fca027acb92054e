use std::sync::Arc;

use residencia_scales::catalog::ScaleCatalog;
use residencia_storage::objects::{MemoryObjectStore, ObjectStore};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ScaleCatalog>,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(catalog: ScaleCatalog, store: Arc<dyn ObjectStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
        }
    }

    /// Built-in scales with a process-local store.
    pub fn in_memory() -> Self {
        Self::new(
            ScaleCatalog::builtin().clone(),
            Arc::new(MemoryObjectStore::new()),
        )
    }
}
