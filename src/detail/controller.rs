// src/detail/controller.rs

//! State controller for the destination-detail view.
//!
//! Opening a destination spawns the venue and review fetches as independent
//! tasks; each completion comes back through a channel as a [`DetailEvent`]
//! tagged with the generation that spawned it. The generation counter is
//! what keeps a slow response for a previous destination from ever touching
//! the state of the current one: close or reopen bumps the counter, and
//! stale events are dropped on arrival.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::detail::state::{DetailEvent, DetailPhase, DetailState};
use crate::error::{AppError, Result};
use crate::models::{City, Session, Venue};
use crate::services::DestinationApi;

/// Owns the state of one destination-detail view.
pub struct DetailController {
    api: Arc<dyn DestinationApi>,
    state: DetailState,
    generation: u64,
    venues_resolved: bool,
    reviews_resolved: bool,
    tx: mpsc::UnboundedSender<DetailEvent>,
    rx: mpsc::UnboundedReceiver<DetailEvent>,
}

impl DetailController {
    /// Create an idle controller on top of a data client.
    pub fn new(api: Arc<dyn DestinationApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: DetailState::default(),
            generation: 0,
            venues_resolved: false,
            reviews_resolved: false,
            tx,
            rx,
        }
    }

    /// The current view state.
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The generation in-flight fetches must carry to be accepted.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open a destination. Any previous view is discarded wholesale and
    /// both fetches start for the new one.
    pub fn open(&mut self, city: City) {
        self.state = DetailState::opening(city);
        self.spawn_fetches();
    }

    /// Close the view. In-flight responses die on the generation check.
    pub fn close(&mut self) {
        self.generation += 1;
        self.venues_resolved = false;
        self.reviews_resolved = false;
        self.state = DetailState::default();
    }

    /// Pick a venue: reveals the map and review panes and keeps them
    /// revealed. Ignored unless the view is ready.
    pub fn select_venue(&mut self, venue: Venue) {
        if self.state.phase != DetailPhase::Ready {
            log::debug!("Ignoring venue selection while {:?}", self.state.phase);
            return;
        }
        self.state.is_expanded = true;
        self.state.selected_venue = Some(venue);
    }

    pub fn set_draft_rating(&mut self, rating: u8) {
        self.state.draft.rating = rating;
    }

    pub fn set_draft_comment(&mut self, comment: impl Into<String>) {
        self.state.draft.comment = comment.into();
    }

    /// Submit the draft review.
    ///
    /// A draft without a rating is refused here, before any request goes
    /// out. On success the draft resets and both fetches re-run so the view
    /// shows what the server actually stored; nothing is inserted
    /// optimistically. On failure the draft stays as typed.
    pub async fn submit_review(&mut self, session: &Session) -> Result<()> {
        if self.state.phase != DetailPhase::Ready {
            return Err(AppError::validation("No destination open"));
        }
        let Some(city_id) = self.state.city.as_ref().map(|c| c.id.clone()) else {
            return Err(AppError::validation("No destination open"));
        };

        let rating = self.state.draft.rating;
        if rating == 0 {
            return Err(AppError::validation("Please select a rating"));
        }
        if rating > 5 {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }

        self.state.is_submitting = true;
        let comment = self.state.draft.comment.clone();
        let accepted = self
            .api
            .submit_review(&city_id, rating, &comment, session)
            .await;
        self.state.is_submitting = false;

        if !accepted {
            return Err(AppError::submission("The service did not accept the review"));
        }

        self.state.draft.reset();
        self.spawn_fetches();
        Ok(())
    }

    /// Feed one fetch completion into the state machine.
    ///
    /// The list pane unblocks as soon as the venues land; review arrival
    /// order does not matter. Events from an older generation are dropped.
    pub fn apply(&mut self, event: DetailEvent) {
        if self.state.phase == DetailPhase::Idle {
            return;
        }

        let generation = match &event {
            DetailEvent::VenuesLoaded { generation, .. }
            | DetailEvent::ReviewsLoaded { generation, .. } => *generation,
        };
        if generation != self.generation {
            log::debug!(
                "Dropping stale fetch result (generation {generation}, current {})",
                self.generation
            );
            return;
        }

        match event {
            DetailEvent::VenuesLoaded { venues, .. } => {
                self.state.venues = venues;
                self.state.is_loading = false;
                self.venues_resolved = true;
            }
            DetailEvent::ReviewsLoaded { reviews, .. } => {
                self.state.reviews = reviews;
                self.reviews_resolved = true;
            }
        }

        if self.venues_resolved && self.reviews_resolved {
            self.state.phase = DetailPhase::Ready;
        }
    }

    /// Pump fetch completions until the view is ready. Returns immediately
    /// when nothing is loading.
    pub async fn wait_ready(&mut self) {
        while self.state.phase == DetailPhase::Loading {
            match self.rx.recv().await {
                Some(event) => self.apply(event),
                None => break,
            }
        }
    }

    /// Bump the generation and start both fetches for the open city.
    fn spawn_fetches(&mut self) {
        let Some(city) = self.state.city.clone() else {
            return;
        };
        self.generation += 1;
        self.venues_resolved = false;
        self.reviews_resolved = false;
        self.state.phase = DetailPhase::Loading;
        self.state.is_loading = true;

        let generation = self.generation;
        let city_id = city.id.clone();

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let venues = api.fetch_venues(&city).await;
            let _ = tx.send(DetailEvent::VenuesLoaded { generation, venues });
        });

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let reviews = api.fetch_reviews(&city_id).await;
            let _ = tx.send(DetailEvent::ReviewsLoaded { generation, reviews });
        });
    }
}
