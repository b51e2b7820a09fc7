//! Places provider client
//!
//! Issues the four kinds of provider calls used by enrichment. Every method
//! makes exactly one outbound request and never retries.

use super::error::UpstreamError;
use super::types::{DetailsReply, RawPlace, TextSearchRequest, TextSearchResponse};
use crate::config::PlacesSettings;
use crate::models::{PhotoMedia, ReviewsBlock};
use crate::network::{HttpClient, HttpResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Fields requested from text search
pub const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.location,places.rating,places.priceLevel,places.userRatingCount,places.formattedAddress,places.shortFormattedAddress,places.photos,places.googleMapsUri,places.websiteUri,places.currentOpeningHours";

/// Fields requested from place details
const DETAILS_FIELDS: &str = "reviews,rating,photos";

/// Calls the enrichment pipeline makes against the provider
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Whether an API credential is available
    fn is_configured(&self) -> bool;

    /// Text search. An empty result set is `Ok(vec![])`.
    async fn search_by_text(&self, query: &str) -> Result<Vec<RawPlace>, UpstreamError>;

    /// Rating, reviews and review photo references for one place
    async fn fetch_reviews(&self, place_id: &str) -> Result<ReviewsBlock, UpstreamError>;

    /// Resolve a photo resource name to its display URI
    async fn fetch_photo_media(&self, photo_name: &str) -> Result<PhotoMedia, UpstreamError>;

    /// Follow the review photo redirect and return the final URL
    async fn fetch_review_photo_media(&self, photo_reference: &str)
        -> Result<String, UpstreamError>;
}

/// HTTP implementation of [`PlacesApi`]
#[derive(Clone)]
pub struct PlacesClient {
    http: HttpClient,
    settings: PlacesSettings,
}

impl PlacesClient {
    pub fn new(http: HttpClient, settings: PlacesSettings) -> Self {
        Self { http, settings }
    }

    fn api_key(&self) -> &str {
        self.settings.api_key.as_deref().unwrap_or_default()
    }

    /// Check the status and decode the body
    fn decode<T: DeserializeOwned>(
        response: HttpResponse,
        endpoint: &'static str,
        context: impl FnOnce() -> String,
    ) -> Result<T, UpstreamError> {
        if !response.is_success() {
            return Err(UpstreamError::Status {
                endpoint,
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| UpstreamError::Decode {
            context: context(),
            source,
        })
    }
}

#[async_trait]
impl PlacesApi for PlacesClient {
    fn is_configured(&self) -> bool {
        self.settings
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    async fn search_by_text(&self, query: &str) -> Result<Vec<RawPlace>, UpstreamError> {
        debug!("Text search for '{}'", query);

        let headers = [
            ("X-Goog-Api-Key", self.api_key()),
            ("X-Goog-FieldMask", SEARCH_FIELD_MASK),
        ];
        let body = TextSearchRequest { text_query: query };
        let response = self
            .http
            .post_json(&self.settings.search_url, &headers, &body)
            .await?;

        let parsed: TextSearchResponse = Self::decode(response, "text search", || {
            format!("text search response for '{}'", query)
        })?;

        debug!("Text search '{}' returned {} places", query, parsed.places.len());
        Ok(parsed.places)
    }

    async fn fetch_reviews(&self, place_id: &str) -> Result<ReviewsBlock, UpstreamError> {
        let params = [
            ("place_id", place_id),
            ("fields", DETAILS_FIELDS),
            ("key", self.api_key()),
        ];
        let response = self.http.get(&self.settings.details_url, &params).await?;

        let reply: DetailsReply = Self::decode(response, "place details", || {
            format!("reviews for place {}", place_id)
        })?;

        debug!(
            "Place {} details status '{}' with {} reviews",
            place_id,
            reply.status,
            reply.result.reviews.len()
        );
        Ok(reply.result)
    }

    async fn fetch_photo_media(&self, photo_name: &str) -> Result<PhotoMedia, UpstreamError> {
        let url = format!(
            "{}/{}/media",
            self.settings.media_base_url.trim_end_matches('/'),
            photo_name
        );
        let max_height = self.settings.photo_max_height_px.to_string();
        let max_width = self.settings.photo_max_width_px.to_string();
        let params = [
            ("key", self.api_key()),
            ("maxHeightPx", max_height.as_str()),
            ("maxWidthPx", max_width.as_str()),
            ("skipHttpRedirect", "true"),
        ];
        let response = self.http.get(&url, &params).await?;

        Self::decode(response, "photo media", || {
            format!("photo media for {}", photo_name)
        })
    }

    async fn fetch_review_photo_media(
        &self,
        photo_reference: &str,
    ) -> Result<String, UpstreamError> {
        let max_width = self.settings.photo_max_width_px.to_string();
        let max_height = self.settings.photo_max_height_px.to_string();
        let params = [
            ("photoreference", photo_reference),
            ("key", self.api_key()),
            ("maxwidth", max_width.as_str()),
            ("maxheight", max_height.as_str()),
        ];
        let resolved = self
            .http
            .resolve(&self.settings.legacy_photo_url, &params)
            .await?;

        if !(200..300).contains(&resolved.status) {
            return Err(UpstreamError::Status {
                endpoint: "review photo",
                status: resolved.status,
            });
        }

        Ok(resolved.url)
    }
}
