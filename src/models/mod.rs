// src/models/mod.rs

//! Domain models for the Escape Genie client.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod city;
mod config;
mod review;
mod session;
mod venue;

// Re-export all public types
pub use city::City;
pub use config::{ApiConfig, Config, MapConfig, MarkerPolicy, UiConfig};
pub use review::{Review, ReviewDraft};
pub use session::Session;
pub use venue::{CityVenues, Venue, VenueCategory};
