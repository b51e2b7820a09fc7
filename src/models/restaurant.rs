//! Normalized restaurant record and its nested blocks

use serde::{Deserialize, Serialize};

/// A fully enriched restaurant, keyed by the provider's place id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restaurant {
    pub name: String,
    pub rating: f64,
    /// Resolved photo media, in provider order
    pub photos: Vec<PhotoMedia>,
    pub location: Location,
    /// Provider place id, used verbatim as the cache and store key
    pub place_id: String,
    /// User flag, never set by the search pipeline
    pub would_try: bool,
    pub reviews: ReviewsBlock,
    pub formatted_address: String,
    pub price_level: String,
    pub website_uri: String,
    pub google_maps_uri: String,
    pub current_opening_hours: OpeningHours,
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A photo resolved through the media endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoMedia {
    pub name: String,
    #[serde(rename = "photoUri")]
    pub photo_uri: String,
}

impl PhotoMedia {
    /// Both fields blank, as returned for an empty media response
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.photo_uri.is_empty()
    }
}

/// Rating, reviews and review photos from the place details endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsBlock {
    pub photos: Vec<ReviewPhoto>,
    pub rating: f64,
    pub reviews: Vec<Review>,
}

/// A review photo.
///
/// Before resolution `photo_reference` is the opaque provider reference;
/// after resolution it holds the final image URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewPhoto {
    pub height: u32,
    pub html_attributions: Vec<String>,
    pub photo_reference: String,
    pub width: u32,
}

impl ReviewPhoto {
    /// Copy of this photo pointing at a resolved URL
    pub fn resolved(&self, url: impl Into<String>) -> Self {
        Self {
            photo_reference: url.into(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub author_name: String,
    pub author_url: String,
    pub language: String,
    pub original_language: String,
    pub profile_photo_url: String,
    pub rating: i32,
    pub relative_time_description: String,
    pub text: String,
    pub time: i64,
    pub translated: bool,
}

/// Opening hours in internal naming
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub open_now: bool,
    pub weekday_descriptions: Vec<String>,
    pub next_close_time: String,
}
