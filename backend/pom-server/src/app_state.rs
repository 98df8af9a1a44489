use pom_db::ProjectStore;

use std::sync::Arc;

/// Shared state handed to every handler.
///
/// The store is connected before the router is built and closed by `main`
/// after the server stops; handlers never open or close it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }
}
