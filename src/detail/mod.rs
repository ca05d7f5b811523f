//! Destination-detail view state.
//!
//! The controller owns the state machine for one open destination: the
//! concurrent venue/review fetches, venue selection, the review draft and
//! the refetch after a submission. It never renders anything; `crate::view`
//! projects the state into a screen model.

mod controller;
mod state;

pub use controller::DetailController;
pub use state::{DetailEvent, DetailPhase, DetailState};
