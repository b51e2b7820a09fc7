//! Caching module for Restaurant Scout
//!
//! Caches single restaurants and whole search result sets as serialized JSON.

use crate::config::CacheSettings;
use crate::models::Restaurant;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::warn;

/// Cache key for a single restaurant
pub fn restaurant_key(place_id: &str) -> String {
    format!("restaurant_{}", place_id)
}

/// Cache key for a search result set
pub fn search_key(query: &str) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(query.trim().to_lowercase().as_bytes());

    format!("search_{:x}", hasher.finalize())
}

/// TTL cache for restaurants and search results
#[derive(Clone)]
pub struct RestaurantCache {
    cache: Cache<String, Vec<u8>>,
}

impl RestaurantCache {
    /// Create a new cache with specified TTL
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        Self { cache }
    }

    pub fn with_settings(settings: &CacheSettings) -> Self {
        Self::new(settings.ttl_secs, settings.max_capacity)
    }

    /// Get a cached restaurant
    pub async fn get_restaurant(&self, place_id: &str) -> Option<Restaurant> {
        self.get_json(&restaurant_key(place_id)).await
    }

    /// Store a restaurant under its place id
    pub async fn set_restaurant(&self, restaurant: &Restaurant) -> bool {
        self.set_json(restaurant_key(&restaurant.place_id), restaurant)
            .await
    }

    /// Get a cached search result set
    pub async fn get_search(&self, query: &str) -> Option<Vec<Restaurant>> {
        self.get_json(&search_key(query)).await
    }

    /// Store a search result set
    pub async fn set_search(&self, query: &str, restaurants: &[Restaurant]) -> bool {
        self.set_json(search_key(query), restaurants).await
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = self.cache.get(key).await?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Unmarshal error for cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn set_json<T: Serialize + ?Sized>(&self, key: String, value: &T) -> bool {
        match serde_json::to_vec(value) {
            Ok(bytes) => {
                self.cache.insert(key, bytes).await;
                true
            }
            Err(e) => {
                warn!("Failed to serialize cache entry {}: {}", key, e);
                false
            }
        }
    }

    #[cfg(test)]
    async fn set_raw(&self, key: String, value: Vec<u8>) {
        self.cache.insert(key, value).await;
    }
}

impl Default for RestaurantCache {
    fn default() -> Self {
        Self::with_settings(&CacheSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OpeningHours, Review, ReviewsBlock};

    fn restaurant(place_id: &str) -> Restaurant {
        Restaurant {
            name: format!("Place {}", place_id),
            place_id: place_id.to_string(),
            rating: 4.1,
            reviews: ReviewsBlock {
                rating: 4.0,
                reviews: vec![Review {
                    author_name: "Bo".to_string(),
                    rating: 4,
                    ..Default::default()
                }],
                ..Default::default()
            },
            current_opening_hours: OpeningHours {
                open_now: true,
                weekday_descriptions: vec!["Sun: 10-4".to_string()],
                next_close_time: "16:00".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(restaurant_key("ChIJ1"), "restaurant_ChIJ1");
        assert_eq!(search_key("Pizza NYC"), search_key("  pizza nyc "));
        assert_ne!(search_key("pizza"), search_key("sushi"));
        assert!(search_key("pizza").starts_with("search_"));
    }

    #[tokio::test]
    async fn test_restaurant_round_trip() {
        let cache = RestaurantCache::new(60, 100);
        let original = restaurant("abc");
        assert!(cache.set_restaurant(&original).await);

        let cached = cache.get_restaurant("abc").await;
        assert_eq!(cached, Some(original));
        assert!(cache.get_restaurant("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_search_round_trip() {
        let cache = RestaurantCache::new(60, 100);
        let results = vec![restaurant("a"), restaurant("b")];
        cache.set_search("tacos", &results).await;

        assert_eq!(cache.get_search("TACOS").await, Some(results));
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_miss() {
        let cache = RestaurantCache::new(60, 100);
        cache.set_raw(restaurant_key("bad"), b"not json".to_vec()).await;
        assert!(cache.get_restaurant("bad").await.is_none());
    }
}
