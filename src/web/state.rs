//! Application state shared across handlers

use crate::cache::RestaurantCache;
use crate::config::Settings;
use crate::places::PlacesApi;
use crate::search::Search;
use crate::store::RestaurantStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search executor
    pub search: Arc<Search>,
    /// Restaurant and search result cache
    pub cache: RestaurantCache,
    /// Saved restaurants
    pub store: Arc<dyn RestaurantStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        settings: Settings,
        api: Arc<dyn PlacesApi>,
        store: Arc<dyn RestaurantStore>,
    ) -> Self {
        let cache = RestaurantCache::with_settings(&settings.cache);

        Self {
            settings: Arc::new(settings),
            search: Arc::new(Search::new(api)),
            cache,
            store,
        }
    }
}
