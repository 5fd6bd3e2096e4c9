/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - token source (gateway boundary), item store handle, admin collection name
 * - Cheap to Clone (everything inside is Arc)
 */
use std::sync::Arc;

use crate::repos::ItemStore;
use crate::services::auth::ValidatedTokenSource;

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<dyn ValidatedTokenSource>,
    pub store: Arc<dyn ItemStore>,
    pub items_collection: Arc<str>,
}

impl AppState {
    pub fn new(
        tokens: Arc<dyn ValidatedTokenSource>,
        store: Arc<dyn ItemStore>,
        items_collection: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            tokens,
            store,
            items_collection: items_collection.into(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens.name())
            .field("store", &self.store.backend_name())
            .field("items_collection", &self.items_collection)
            .finish()
    }
}
