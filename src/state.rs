use std::sync::Arc;

use crate::{
    config::AppConfig,
    query::QueryClient,
    repository::{MemoryStore, StoreRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StoreRepository>,
    pub queries: Arc<QueryClient>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn StoreRepository>, config: AppConfig) -> Self {
        Self {
            store,
            queries: Arc::new(QueryClient::new()),
            config: Arc::new(config),
        }
    }

    /// State backed by the seeded memory store.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(Arc::new(MemoryStore::seeded()), config)
    }
}
