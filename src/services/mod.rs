//! Service layer for the Escape Genie client.
//!
//! This module contains the remote-API surface:
//! - Shared HTTP plumbing (`TravelClient`)
//! - Account registration and login (`auth`)
//! - Free-text destination search (`search`)
//! - Saved-destination bookkeeping (`saved`)
//! - Detail-view data access (`destinations`)

mod auth;
mod client;
mod destinations;
mod saved;
mod search;

use async_trait::async_trait;

use crate::models::{City, CityVenues, Review, Session};

// Re-export for convenience
pub use client::TravelClient;
pub use search::{Budget, SearchRequest, TravelerType, TripScope};

/// The three calls the destination-detail view depends on.
///
/// Implementations collapse failures instead of propagating them: reads
/// yield empty collections, the write yields `false`. The view never sees a
/// transport error.
#[async_trait]
pub trait DestinationApi: Send + Sync {
    /// Venues near a destination, grouped by kind.
    async fn fetch_venues(&self, city: &City) -> CityVenues;

    /// Reviews for a destination, in the service's newest-first order.
    async fn fetch_reviews(&self, city_id: &str) -> Vec<Review>;

    /// Submit a review; `true` means the service accepted it.
    async fn submit_review(
        &self,
        city_id: &str,
        rating: u8,
        comment: &str,
        session: &Session,
    ) -> bool;
}
