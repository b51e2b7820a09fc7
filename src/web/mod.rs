//! Web server module
//!
//! Provides the HTTP API for searching, looking up and saving restaurants.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
