//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(handlers::ping))
        // API routes
        .route("/api/search", get(handlers::search))
        .route("/api/restaurant/:place_id", get(handlers::get_restaurant))
        .route("/api/save", post(handlers::save_restaurant))
        .route("/api/restaurants", get(handlers::list_restaurants))
        .route("/api/restaurants/ids", get(handlers::list_restaurant_ids))
        // Add middleware
        .layer(cors)
        // Add state
        .with_state(state)
}
