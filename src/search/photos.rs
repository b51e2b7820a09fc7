//! Photo and review photo resolution

use super::fanout::join_indexed;
use crate::models::{PhotoMedia, ReviewPhoto};
use crate::places::{PhotoRef, PlacesApi, UpstreamError};
use tracing::debug;

/// Resolve every photo of a place through the media endpoint.
///
/// Output follows input order. Blank media responses are dropped. Any
/// failed lookup fails the whole set.
pub async fn resolve_photos(
    api: &dyn PlacesApi,
    photos: &[PhotoRef],
) -> Result<Vec<PhotoMedia>, UpstreamError> {
    if photos.is_empty() {
        return Ok(Vec::new());
    }

    let media = join_indexed(photos.iter().map(|photo| api.fetch_photo_media(&photo.name))).await?;

    Ok(media.into_iter().filter(|m| !m.is_blank()).collect())
}

/// Resolve review photo references to their final image URLs.
///
/// Height, width and attributions are carried over unchanged. Any failed
/// lookup fails the whole set; callers decide whether that is fatal.
pub async fn resolve_review_photos(
    api: &dyn PlacesApi,
    photos: &[ReviewPhoto],
) -> Result<Vec<ReviewPhoto>, UpstreamError> {
    if photos.is_empty() {
        return Ok(Vec::new());
    }

    join_indexed(photos.iter().map(|photo| async move {
        api.fetch_review_photo_media(&photo.photo_reference)
            .await
            .map(|url| photo.resolved(url))
            .map_err(|e| {
                debug!("Review photo {} failed: {}", short_ref(&photo.photo_reference), e);
                e
            })
    }))
    .await
}

/// Leading characters of a reference, for log lines
fn short_ref(reference: &str) -> &str {
    match reference.char_indices().nth(20) {
        Some((end, _)) => &reference[..end],
        None => reference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_ref() {
        assert_eq!(short_ref("abc"), "abc");
        assert_eq!(short_ref("0123456789abcdefghijKLMNOP"), "0123456789abcdefghij");
    }
}
