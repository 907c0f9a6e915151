use std::sync::Arc;

use crate::assets::AssetStore;

/// Shared application state
///
/// The asset store is read-only after startup, so handlers share it without
/// any locking.
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<AssetStore>,
}

impl AppState {
    pub fn new(assets: AssetStore) -> Self {
        Self {
            assets: Arc::new(assets),
        }
    }
}
