//! Search orchestration module
//!
//! Runs text search, then enriches every place concurrently with reviews,
//! photos and review photos, and aggregates the results in input order.

mod error;
mod executor;
mod fanout;
mod photos;
mod place;

pub use error::{EnrichmentError, FetchStage, SearchError};
pub use executor::Search;
pub use fanout::join_indexed;
pub use photos::{resolve_photos, resolve_review_photos};
pub use place::enrich_place;
