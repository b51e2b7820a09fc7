//! HTTP networking module
//!
//! Provides the shared outbound HTTP client used for places provider calls.

mod client;

pub use client::{HttpClient, HttpResponse, ResolvedLocation};
