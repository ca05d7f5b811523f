// src/detail/state.rs

//! Snapshot of one open destination-detail view.

use crate::models::{City, CityVenues, Review, ReviewDraft, Venue};

/// Lifecycle of the detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailPhase {
    /// Nothing open.
    #[default]
    Idle,

    /// A destination is open and at least one fetch is outstanding.
    Loading,

    /// Both fetches have landed for the current generation.
    Ready,
}

/// Completion of one background fetch, tagged with the generation that
/// spawned it. Events from an older generation are dropped on arrival.
#[derive(Debug, Clone)]
pub enum DetailEvent {
    VenuesLoaded {
        generation: u64,
        venues: CityVenues,
    },
    ReviewsLoaded {
        generation: u64,
        reviews: Vec<Review>,
    },
}

/// Everything the detail view shows, in one place.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Where the view is in its lifecycle
    pub phase: DetailPhase,

    /// The open destination, `None` only while idle
    pub city: Option<City>,

    /// Fetched venues, grouped the way the service returns them
    pub venues: CityVenues,

    /// Fetched reviews in the service's newest-first order
    pub reviews: Vec<Review>,

    /// True until the venues fetch lands; the reviews fetch does not hold
    /// the list pane hostage
    pub is_loading: bool,

    /// The venue the user picked. Once set it never reverts to `None`
    /// while the view stays open, it only moves to another venue.
    pub selected_venue: Option<Venue>,

    /// Whether the map and review panes have been revealed. Monotonic for
    /// the lifetime of one open view.
    pub is_expanded: bool,

    /// The review being composed
    pub draft: ReviewDraft,

    /// True while a submission is in flight; the form is disabled meanwhile
    pub is_submitting: bool,
}

impl DetailState {
    /// Fresh state for a newly opened destination.
    pub(crate) fn opening(city: City) -> Self {
        Self {
            phase: DetailPhase::Loading,
            city: Some(city),
            is_loading: true,
            ..Self::default()
        }
    }

    /// Arithmetic mean of the review ratings, `None` when there are none.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(total) / self.reviews.len() as f64)
    }
}
