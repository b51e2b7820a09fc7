//! Search and enrichment errors

use crate::places::{RawPlace, UpstreamError};
use std::fmt;
use thiserror::Error;

/// Which per-place fetch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Reviews,
    Photo,
    ReviewPhoto,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reviews => "reviews",
            Self::Photo => "photo",
            Self::ReviewPhoto => "review photo",
        };
        f.write_str(name)
    }
}

/// A place could not be enriched
#[derive(Debug, Error)]
#[error("failed to fetch {stage} for {place}: {source}")]
pub struct EnrichmentError {
    /// Display name, or the place id when the name is empty
    pub place: String,
    pub place_id: String,
    pub stage: FetchStage,
    #[source]
    pub source: UpstreamError,
}

impl EnrichmentError {
    pub fn new(place: &RawPlace, stage: FetchStage, source: UpstreamError) -> Self {
        Self {
            place: place.label().to_string(),
            place_id: place.id.clone(),
            stage,
            source,
        }
    }
}

/// A search call failed as a whole
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API credential configured; nothing was sent upstream
    #[error("PLACES_API_KEY is not configured")]
    MissingApiKey,

    /// Text search itself failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// One of the places failed to enrich
    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),
}
