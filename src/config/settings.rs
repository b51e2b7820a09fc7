//! Settings structures for Restaurant Scout configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub places: PlacesSettings,
    pub cache: CacheSettings,
    pub store: StoreSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("PLACES_API_KEY") {
            if !val.trim().is_empty() {
                self.places.api_key = Some(val);
            }
        }
        if let Ok(val) = std::env::var("RESTAURANT_SCOUT_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("RESTAURANT_SCOUT_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("RESTAURANT_SCOUT_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("RESTAURANT_SCOUT_STORE_PATH") {
            self.store.path = PathBuf::from(val);
        }
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Per-request socket timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// User agent sent with every upstream request
    pub user_agent: String,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 20,
            user_agent: format!("restaurant-scout/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Places provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacesSettings {
    /// Provider API key. Searches fail fast when this is unset.
    pub api_key: Option<String>,
    /// Text search endpoint
    pub search_url: String,
    /// Place details endpoint used for reviews
    pub details_url: String,
    /// Base for `{name}/media` photo lookups
    pub media_base_url: String,
    /// Photo endpoint that answers with a redirect to the image
    pub legacy_photo_url: String,
    pub photo_max_width_px: u32,
    pub photo_max_height_px: u32,
}

impl Default for PlacesSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            search_url: "https://places.googleapis.com/v1/places:searchText".to_string(),
            details_url: "https://maps.googleapis.com/maps/api/place/details/json".to_string(),
            media_base_url: "https://places.googleapis.com/v1".to_string(),
            legacy_photo_url: "https://maps.googleapis.com/maps/api/place/photo".to_string(),
            photo_max_width_px: 1920,
            photo_max_height_px: 1080,
        }
    }
}

impl PlacesSettings {
    /// Point every endpoint at one base URL, as a mock server would serve them
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            search_url: format!("{}/v1/places:searchText", base),
            details_url: format!("{}/maps/api/place/details/json", base),
            media_base_url: format!("{}/v1", base),
            legacy_photo_url: format!("{}/maps/api/place/photo", base),
            ..Default::default()
        }
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// Result cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Entry lifetime in seconds
    pub ttl_secs: u64,
    pub max_capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: 7 * 24 * 60 * 60,
            max_capacity: 10_000,
        }
    }
}

/// Saved restaurant store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// JSON file holding saved restaurants
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/saved_restaurants.json"),
        }
    }
}
