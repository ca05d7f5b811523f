// src/view/model.rs

//! Screen model for the destination-detail view.
//!
//! Plain displayable data only: strings, flags and marker coordinates.
//! Anything that needed domain knowledge was resolved during projection.

use crate::map::MapPoint;

/// The whole detail view, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailScreen {
    /// Destination name for the header
    pub title: String,

    /// Average-rating header line
    pub rating: RatingSummary,

    pub list: ListPane,
    pub map: MapPane,
    pub reviews: ReviewsPane,
}

/// Header summary of all reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSummary {
    /// Star glyphs for the rounded average; empty when there are no reviews
    pub stars: String,

    /// e.g. "4.5 (2 reviews)", or the "No ratings yet" sentinel
    pub label: String,
}

/// Left pane: the venue listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPane {
    /// Show a loading placeholder instead of sections
    pub loading: bool,

    /// Headed sections; groups with no venues are omitted entirely
    pub sections: Vec<VenueSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSection {
    pub heading: String,
    pub rows: Vec<VenueRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueRow {
    /// Selection key: venue id when present, name otherwise
    pub key: String,

    pub name: String,
    pub address: String,

    /// Outbound directions link; a separate target from row selection
    pub directions_url: Option<String>,
}

/// Middle pane: the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPane {
    /// Hidden until the view expands on first venue selection
    pub visible: bool,

    pub points: Vec<MapPoint>,
    pub zoom: u8,
    pub dark_mode: bool,
}

/// Right pane: reviews plus the submission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsPane {
    /// Hidden until the view expands on first venue selection
    pub visible: bool,

    /// Reviews in the service's order; no client-side sorting
    pub entries: Vec<ReviewRow>,

    pub form: ReviewFormView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub username: String,
    pub stars: String,
    pub comment: String,
    pub date: String,
}

/// The review form, mirroring the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFormView {
    pub rating: u8,
    pub stars: String,
    pub comment: String,

    /// Disables the form while a submission is in flight
    pub submitting: bool,
}
