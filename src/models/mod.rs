//! Normalized restaurant models
//!
//! These are the records returned by search, cached, and saved to the store.

mod restaurant;

pub use restaurant::*;
