//! Single place enrichment

use super::error::{EnrichmentError, FetchStage};
use super::photos::{resolve_photos, resolve_review_photos};
use crate::models::{Location, Restaurant};
use crate::places::{PlacesApi, RawPlace};
use tracing::{debug, warn};

/// Enrich one search result into a [`Restaurant`].
///
/// Reviews are fetched first since review photo references come from them.
/// Photos and review photos are then resolved concurrently. A reviews or
/// photo failure aborts the place; a review photo failure keeps the
/// unresolved references.
pub async fn enrich_place(
    api: &dyn PlacesApi,
    place: RawPlace,
) -> Result<Restaurant, EnrichmentError> {
    let mut reviews = api
        .fetch_reviews(&place.id)
        .await
        .map_err(|e| EnrichmentError::new(&place, FetchStage::Reviews, e))?;

    let (photos, review_photos) = tokio::join!(
        resolve_photos(api, &place.photos),
        resolve_review_photos(api, &reviews.photos),
    );

    let photos = photos.map_err(|e| EnrichmentError::new(&place, FetchStage::Photo, e))?;

    match review_photos {
        Ok(resolved) => reviews.photos = resolved,
        Err(e) => warn!(
            "{}; keeping unresolved references",
            EnrichmentError::new(&place, FetchStage::ReviewPhoto, e)
        ),
    }

    debug!(
        "Enriched {} with {} photos and {} reviews",
        place.label(),
        photos.len(),
        reviews.reviews.len()
    );

    let formatted_address = place.address().to_string();
    Ok(Restaurant {
        name: place.display_name.text,
        rating: place.rating,
        photos,
        location: Location {
            lat: place.location.latitude,
            lng: place.location.longitude,
        },
        place_id: place.id,
        would_try: false,
        reviews,
        formatted_address,
        price_level: place.price_level,
        website_uri: place.website_uri,
        google_maps_uri: place.google_maps_uri,
        current_opening_hours: place.current_opening_hours.into(),
    })
}
