//! HTTP surface tests driven through the axum router.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use restaurant_scout::config::Settings;
use restaurant_scout::models::{PhotoMedia, ReviewsBlock};
use restaurant_scout::places::{LocalizedText, PlacesApi, RawPlace, UpstreamError};
use restaurant_scout::store::{JsonFileStore, RestaurantStore};
use restaurant_scout::web::{create_router, AppState};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

struct FixedApi {
    configured: bool,
    search_calls: AtomicUsize,
}

#[async_trait]
impl PlacesApi for FixedApi {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn search_by_text(&self, query: &str) -> Result<Vec<RawPlace>, UpstreamError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![RawPlace {
            id: format!("id-{}", query),
            display_name: LocalizedText {
                text: format!("Best {}", query),
                ..Default::default()
            },
            ..Default::default()
        }])
    }

    async fn fetch_reviews(&self, _place_id: &str) -> Result<ReviewsBlock, UpstreamError> {
        Ok(ReviewsBlock::default())
    }

    async fn fetch_photo_media(&self, _photo_name: &str) -> Result<PhotoMedia, UpstreamError> {
        Ok(PhotoMedia::default())
    }

    async fn fetch_review_photo_media(
        &self,
        photo_reference: &str,
    ) -> Result<String, UpstreamError> {
        Ok(photo_reference.to_string())
    }
}

fn app(configured: bool) -> (Router, Arc<FixedApi>) {
    let api = Arc::new(FixedApi {
        configured,
        search_calls: AtomicUsize::new(0),
    });
    let store: Arc<dyn RestaurantStore> = Arc::new(JsonFileStore::in_memory());
    let state = AppState::new(Settings::default(), api.clone(), store);
    (create_router(state), api)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn ping_answers_pong() {
    let (app, _) = app(true);
    let response = app.oneshot(get("/ping")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"pong");
}

#[tokio::test]
async fn search_requires_query() {
    let (app, api) = app(true);

    let (status, body) = send(&app, get("/api/search?query=%20")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Query parameter is required");
    assert_eq!(api.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn search_results_are_cached() {
    let (app, api) = app(true);

    let (status, body) = send(&app, get("/api/search?query=ramen")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["place_id"], "id-ramen");
    assert_eq!(body["data"][0]["name"], "Best ramen");

    let (status, cached) = send(&app, get("/api/search?query=ramen")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cached, body);
    assert_eq!(api.search_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn search_failure_is_generic_bad_request() {
    let (app, _) = app(false);

    let (status, body) = send(&app, get("/api/search?query=ramen")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Error searching"}));
}

#[tokio::test]
async fn save_then_lookup_and_list() {
    let (app, _) = app(true);
    let restaurant = json!({
        "name": "Cafe Blue",
        "place_id": "blue-1",
        "rating": 4.2,
        "would_try": true
    });

    let (status, body) = send(&app, post_json("/api/save", restaurant)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Restaurant saved successfully");

    let (status, body) = send(&app, get("/api/restaurant/blue-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Cafe Blue");
    assert_eq!(body["data"]["would_try"], true);

    let (status, body) = send(&app, get("/api/restaurants")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["place_id"], "blue-1");

    let (status, body) = send(&app, get("/api/restaurants/ids")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(["blue-1"]));
}

#[tokio::test]
async fn save_rejects_missing_place_id() {
    let (app, _) = app(true);

    let (status, body) = send(&app, post_json("/api/save", json!({"name": "No Id"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "PlaceID is required");
}

#[tokio::test]
async fn save_rejects_malformed_body() {
    let (app, _) = app(true);

    let request = Request::builder()
        .method("POST")
        .uri("/api/save")
        .header("content-type", "application/json")
        .body(Body::from("{\"place_id\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn duplicate_save_is_server_error() {
    let (app, _) = app(true);
    let restaurant = json!({"name": "Twice", "place_id": "dup-1"});

    send(&app, post_json("/api/save", restaurant.clone())).await;
    let (status, body) = send(&app, post_json("/api/save", restaurant)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["placeID"], "dup-1");
}

#[tokio::test]
async fn unknown_restaurant_is_not_found() {
    let (app, _) = app(true);

    let (status, body) = send(&app, get("/api/restaurant/missing-9")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"message": "Restaurant not found", "placeID": "missing-9"})
    );
}
