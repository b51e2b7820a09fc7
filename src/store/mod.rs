//! Saved restaurant store
//!
//! Saved restaurants are keyed by place id, which is unique across the store.

mod json_file;

pub use json_file::JsonFileStore;

use crate::models::Restaurant;
use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a [`RestaurantStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("restaurant with place_id {0} already exists")]
    DuplicatePlaceId(String),

    #[error("restaurant with place_id {0} not found")]
    NotFound(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence for saved restaurants
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Insert a new restaurant; fails if the place id is already saved
    async fn insert(&self, restaurant: Restaurant) -> Result<(), StoreError>;

    async fn find_by_place_id(&self, place_id: &str) -> Result<Restaurant, StoreError>;

    /// Replace the restaurant with the same place id, or append it
    async fn upsert(&self, restaurant: Restaurant) -> Result<(), StoreError>;

    /// All saved restaurants in insertion order
    async fn list_all(&self) -> Result<Vec<Restaurant>, StoreError>;

    async fn list_ids(&self) -> Result<Vec<String>, StoreError>;
}
