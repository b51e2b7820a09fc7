//! Wire shapes of the places provider responses

use crate::models::{OpeningHours, ReviewsBlock};
use serde::{Deserialize, Serialize};

/// Text search request body
#[derive(Debug, Clone, Serialize)]
pub struct TextSearchRequest<'a> {
    #[serde(rename = "textQuery")]
    pub text_query: &'a str,
}

/// Text search response. A response without `places` means no results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextSearchResponse {
    pub places: Vec<RawPlace>,
}

/// One place as returned by text search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPlace {
    pub id: String,
    pub formatted_address: String,
    pub short_formatted_address: String,
    pub location: LatLng,
    pub rating: f64,
    pub price_level: String,
    pub user_rating_count: u32,
    pub display_name: LocalizedText,
    pub photos: Vec<PhotoRef>,
    pub google_maps_uri: String,
    pub website_uri: String,
    pub current_opening_hours: ProviderOpeningHours,
}

impl RawPlace {
    /// Full address, or the short one when the full address is empty
    pub fn address(&self) -> &str {
        if self.formatted_address.is_empty() {
            &self.short_formatted_address
        } else {
            &self.formatted_address
        }
    }

    /// Display name, falling back to the id for error context
    pub fn label(&self) -> &str {
        if self.display_name.text.is_empty() {
            &self.id
        } else {
            &self.display_name.text
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    pub language_code: String,
}

/// Photo reference attached to a search result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhotoRef {
    /// Resource name, e.g. `places/{id}/photos/{ref}`
    pub name: String,
    pub width_px: u32,
    pub height_px: u32,
    pub author_attributions: Vec<AuthorAttribution>,
    pub flag_content_uri: String,
    pub google_maps_uri: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorAttribution {
    pub display_name: String,
    pub uri: String,
    pub photo_uri: String,
}

/// Opening hours in provider naming
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderOpeningHours {
    pub open_now: bool,
    pub weekday_descriptions: Vec<String>,
    pub next_close_time: String,
}

impl From<ProviderOpeningHours> for OpeningHours {
    fn from(hours: ProviderOpeningHours) -> Self {
        Self {
            open_now: hours.open_now,
            weekday_descriptions: hours.weekday_descriptions,
            next_close_time: hours.next_close_time,
        }
    }
}

/// Place details envelope carrying the reviews block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetailsReply {
    pub html_attributions: Vec<serde_json::Value>,
    pub result: ReviewsBlock,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_place() {
        let json = r#"{
            "places": [{
                "id": "ChIJ1",
                "displayName": {"text": "Pizza Place", "languageCode": "en"},
                "location": {"latitude": 40.7, "longitude": -74.0},
                "rating": 4.2,
                "priceLevel": "PRICE_LEVEL_INEXPENSIVE",
                "shortFormattedAddress": "123 Main St",
                "photos": [{"name": "places/ChIJ1/photos/a", "widthPx": 400, "heightPx": 300}],
                "currentOpeningHours": {"openNow": true, "weekdayDescriptions": ["Mon"], "nextCloseTime": "t"}
            }]
        }"#;
        let response: TextSearchResponse = serde_json::from_str(json).unwrap();
        let place = &response.places[0];

        assert_eq!(place.id, "ChIJ1");
        assert_eq!(place.label(), "Pizza Place");
        assert_eq!(place.photos[0].width_px, 400);
        assert!(place.current_opening_hours.open_now);
        assert_eq!(place.address(), "123 Main St");
    }

    #[test]
    fn test_missing_places_is_empty() {
        let response: TextSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.places.is_empty());
    }

    #[test]
    fn test_address_prefers_full() {
        let place = RawPlace {
            formatted_address: "123 Main St, Springfield".to_string(),
            short_formatted_address: "123 Main St".to_string(),
            ..Default::default()
        };
        assert_eq!(place.address(), "123 Main St, Springfield");
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let place = RawPlace {
            id: "ChIJ9".to_string(),
            ..Default::default()
        };
        assert_eq!(place.label(), "ChIJ9");
    }

    #[test]
    fn test_opening_hours_mapping() {
        let hours = ProviderOpeningHours {
            open_now: true,
            weekday_descriptions: vec!["Tue: closed".to_string()],
            next_close_time: "2024-05-01T21:00:00Z".to_string(),
        };
        let mapped = OpeningHours::from(hours);
        assert!(mapped.open_now);
        assert_eq!(mapped.weekday_descriptions, vec!["Tue: closed"]);
        assert_eq!(mapped.next_close_time, "2024-05-01T21:00:00Z");
    }

    #[test]
    fn test_details_without_result() {
        let reply: DetailsReply = serde_json::from_str(r#"{"status": "NOT_FOUND"}"#).unwrap();
        assert_eq!(reply.status, "NOT_FOUND");
        assert!(reply.result.reviews.is_empty());
    }
}
