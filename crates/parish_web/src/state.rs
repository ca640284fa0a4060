use parish_core::ContentStore;
use parish_store::{ResolveContext, SlugMap};
use std::sync::Arc;

/// Immutable per-process state; every request reads the store
/// independently, so no locking is needed.
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub slugs: SlugMap,
    pub ctx: ResolveContext,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, slugs: SlugMap, ctx: ResolveContext) -> Self {
        Self { store, slugs, ctx }
    }
}
