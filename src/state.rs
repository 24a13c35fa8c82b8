//! Shared application state for all routes.

use crate::store::ViveroStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The only shared resource: a handle to the store, passed into every handler.
    pub store: Arc<dyn ViveroStore>,
}

impl AppState {
    pub fn new<S: ViveroStore + 'static>(store: S) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
