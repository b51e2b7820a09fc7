//! HTTP request handlers

use super::state::AppState;
use crate::models::Restaurant;
use crate::store::StoreError;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info, warn};

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

fn message(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn message_for(status: StatusCode, message: &str, place_id: &str) -> Response {
    (
        status,
        Json(json!({ "message": message, "placeID": place_id })),
    )
        .into_response()
}

/// Liveness check
pub async fn ping() -> &'static str {
    "pong"
}

/// Search restaurants, served from cache when possible
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = match params.query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return message(StatusCode::BAD_REQUEST, "Query parameter is required"),
    };

    if let Some(cached) = state.cache.get_search(&query).await {
        debug!("Cache hit for search '{}'", query);
        return Json(json!({ "data": cached })).into_response();
    }

    match state.search.execute(&query).await {
        Ok(restaurants) => {
            if !restaurants.is_empty() {
                state.cache.set_search(&query, &restaurants).await;
            }
            Json(json!({ "data": restaurants })).into_response()
        }
        Err(e) => {
            error!("Error searching '{}': {}", query, e);
            message(StatusCode::BAD_REQUEST, "Error searching")
        }
    }
}

/// Look up one restaurant from the cache, then the store
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Response {
    if let Some(cached) = state.cache.get_restaurant(&place_id).await {
        debug!("Cache hit for restaurant {}", place_id);
        return Json(json!({ "data": cached })).into_response();
    }

    match state.store.find_by_place_id(&place_id).await {
        Ok(restaurant) => {
            info!("Found restaurant in store: {}", place_id);
            state.cache.set_restaurant(&restaurant).await;
            Json(json!({ "data": restaurant })).into_response()
        }
        Err(StoreError::NotFound(_)) => {
            debug!("Restaurant not found: {}", place_id);
            message_for(StatusCode::NOT_FOUND, "Restaurant not found", &place_id)
        }
        Err(e) => {
            warn!("Restaurant lookup failed for {}: {}", place_id, e);
            message_for(StatusCode::NOT_FOUND, "Restaurant not found", &place_id)
        }
    }
}

/// Save a restaurant
pub async fn save_restaurant(
    State(state): State<AppState>,
    body: Result<Json<Restaurant>, JsonRejection>,
) -> Response {
    let Json(restaurant) = match body {
        Ok(body) => body,
        Err(e) => {
            warn!("Error parsing request body: {}", e);
            return message(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    if restaurant.place_id.is_empty() {
        return message(StatusCode::BAD_REQUEST, "PlaceID is required");
    }

    info!("Attempting to save restaurant with PlaceID: {}", restaurant.place_id);

    let place_id = restaurant.place_id.clone();
    match state.store.insert(restaurant.clone()).await {
        Ok(()) => {
            state.cache.set_restaurant(&restaurant).await;
            Json(json!({ "message": "Restaurant saved successfully" })).into_response()
        }
        Err(e) => {
            error!("Error saving restaurant {}: {}", place_id, e);
            message_for(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error saving restaurant",
                &place_id,
            )
        }
    }
}

/// List all saved restaurants
pub async fn list_restaurants(State(state): State<AppState>) -> Response {
    match state.store.list_all().await {
        Ok(restaurants) => {
            let count = restaurants.len();
            Json(json!({ "data": restaurants, "count": count })).into_response()
        }
        Err(e) => {
            error!("Error getting saved restaurants: {}", e);
            message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error retrieving saved restaurants",
            )
        }
    }
}

/// List the place ids of all saved restaurants
pub async fn list_restaurant_ids(State(state): State<AppState>) -> Response {
    match state.store.list_ids().await {
        Ok(ids) => Json(json!({ "data": ids })).into_response(),
        Err(e) => {
            error!("Error getting saved restaurants ids: {}", e);
            message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error retrieving saved restaurants ids",
            )
        }
    }
}
