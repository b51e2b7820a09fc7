//! Restaurant Scout: restaurant search with review and photo enrichment
//!
//! Searches a places provider by text, enriches every result with reviews,
//! photo media and review photos through concurrent follow-up calls, and
//! serves, caches and saves the resulting records.

pub mod cache;
pub mod config;
pub mod models;
pub mod network;
pub mod places;
pub mod search;
pub mod store;
pub mod web;

pub use config::Settings;
pub use models::Restaurant;
pub use places::{PlacesApi, PlacesClient};
pub use search::{Search, SearchError};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
