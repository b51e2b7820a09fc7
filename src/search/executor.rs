//! Search execution and orchestration

use super::error::SearchError;
use super::fanout::join_indexed;
use super::place::enrich_place;
use crate::models::Restaurant;
use crate::places::PlacesApi;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Search executor that runs text search and enriches every result
pub struct Search {
    api: Arc<dyn PlacesApi>,
}

impl Search {
    /// Create a new search executor over a places provider
    pub fn new(api: Arc<dyn PlacesApi>) -> Self {
        Self { api }
    }

    /// Search places by text and enrich every result.
    ///
    /// Results keep the provider's order. If any place fails to enrich, the
    /// whole call fails with that one error and no partial list is returned.
    pub async fn execute(&self, query: &str) -> Result<Vec<Restaurant>, SearchError> {
        if !self.api.is_configured() {
            return Err(SearchError::MissingApiKey);
        }

        let start = Instant::now();
        let places = self.api.search_by_text(query).await?;
        if places.is_empty() {
            info!("Search '{}' returned no places", query);
            return Ok(Vec::new());
        }

        info!("Enriching {} places for search '{}'", places.len(), query);

        let api = self.api.as_ref();
        let restaurants = join_indexed(places.into_iter().map(|place| enrich_place(api, place)))
            .await
            .map_err(|e| {
                warn!("Search '{}' failed: {}", query, e);
                e
            })?;

        info!(
            "Search '{}' enriched {} places in {:?}",
            query,
            restaurants.len(),
            start.elapsed()
        );

        Ok(restaurants)
    }
}
