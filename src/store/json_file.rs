//! JSON file backed store

use super::{RestaurantStore, StoreError};
use crate::models::Restaurant;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Store that keeps every saved restaurant in memory and rewrites a JSON
/// file after each mutation
pub struct JsonFileStore {
    path: Option<PathBuf>,
    records: RwLock<Vec<Restaurant>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing records if the file exists
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Opened store at {} with {} restaurants",
            path.display(),
            records.len()
        );

        Ok(Self {
            path: Some(path),
            records: RwLock::new(records),
        })
    }

    /// A store that never touches disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: RwLock::new(Vec::new()),
        }
    }

    async fn persist(&self, records: &[Restaurant]) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, path).await?;

        debug!("Wrote {} restaurants to {}", records.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl RestaurantStore for JsonFileStore {
    async fn insert(&self, restaurant: Restaurant) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.place_id == restaurant.place_id) {
            return Err(StoreError::DuplicatePlaceId(restaurant.place_id));
        }

        records.push(restaurant);
        if let Err(e) = self.persist(&records).await {
            records.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn find_by_place_id(&self, place_id: &str) -> Result<Restaurant, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.place_id == place_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(place_id.to_string()))
    }

    async fn upsert(&self, restaurant: Restaurant) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let mut updated = records.clone();
        match updated
            .iter()
            .position(|r| r.place_id == restaurant.place_id)
        {
            Some(index) => updated[index] = restaurant,
            None => updated.push(restaurant),
        }

        self.persist(&updated).await?;
        *records = updated;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Restaurant>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .map(|r| r.place_id.clone())
            .collect())
    }
}
