//! Restaurant Scout
//!
//! This is the main entry point for the application.

use anyhow::Result;
use restaurant_scout::{
    config,
    network::HttpClient,
    places::{PlacesApi, PlacesClient},
    store::{JsonFileStore, RestaurantStore},
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = config::load()?;

    // Initialize logging
    let level = if settings.general.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    info!("Starting Restaurant Scout v{}", restaurant_scout::VERSION);

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!(
        "HTTP client initialized with {:?} request timeout",
        client.timeout()
    );

    let places = PlacesClient::new(client, settings.places.clone());
    if !places.is_configured() {
        warn!("PLACES_API_KEY is not set; searches will fail");
    }

    // Open saved restaurant store
    let store = JsonFileStore::open(&settings.store.path).await?;
    let store: Arc<dyn RestaurantStore> = Arc::new(store);

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let state = AppState::new(settings, Arc::new(places), store);
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
