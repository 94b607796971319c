use std::sync::Arc;

use crate::db::{SqliteWatchStore, WatchStore};
use crate::error::AppResult;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WatchStore>,
    pub catalog: &'static [&'static str],
}

impl AppState {
    /// Creates state around an existing store, using the built-in catalog
    pub fn new(store: Arc<dyn WatchStore>) -> Self {
        Self {
            store,
            catalog: crate::models::CATALOG,
        }
    }

    /// Creates state backed by a fresh in-memory database
    pub async fn in_memory() -> AppResult<Self> {
        let store = SqliteWatchStore::in_memory().await?;
        Ok(Self::new(Arc::new(store)))
    }
}
