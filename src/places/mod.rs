//! Places provider module
//!
//! Wire types, error taxonomy and the HTTP client for the upstream places API.

mod client;
mod error;
mod types;

pub use client::{PlacesApi, PlacesClient, SEARCH_FIELD_MASK};
pub use error::UpstreamError;
pub use types::*;
