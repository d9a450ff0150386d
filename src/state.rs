//! Shared application state for all routes.

use crate::cache::PageCache;
use crate::config::AppConfig;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub cache: PageCache,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        AppState {
            store,
            cache: PageCache::new(),
            config: Arc::new(config),
        }
    }
}
