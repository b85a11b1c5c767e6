use std::ops::Deref;
use std::sync::Arc;

use api::StoreClient;

#[derive(Debug)]
pub struct AppStateData {
    pub client: StoreClient,
}

/// The stable, non-reactive application state: one shared client handle.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new() -> Self {
        Self(Arc::new(AppStateData {
            client: StoreClient::default(),
        }))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
