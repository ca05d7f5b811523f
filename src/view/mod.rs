//! Pure projection of detail-view state into a renderable screen model.
//!
//! Nothing in here talks to the network or mutates state: `project` derives
//! a [`DetailScreen`] from a state snapshot, `format` turns pieces of it
//! into text. Rendering stays trivially testable that way.

mod format;
mod model;
mod project;

pub use format::{rating_summary, render_screen, review_date, stars};
pub use model::{
    DetailScreen, ListPane, MapPane, RatingSummary, ReviewFormView, ReviewRow, ReviewsPane,
    VenueRow, VenueSection,
};
pub use project::build_detail_screen;
