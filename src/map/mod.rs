//! Map surface abstraction.
//!
//! The detail view only ever hands a marker list, a theme flag and a zoom
//! level to "something that draws maps"; what that something is stays
//! swappable. The built-in [`TextMap`] draws a plain-text panel for the
//! terminal.

use crate::models::{MapConfig, Venue};

/// One marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub id: Option<String>,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Venue> for MapPoint {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id.clone(),
            name: venue.name.clone(),
            lat: venue.lat,
            lon: venue.lon,
        }
    }
}

/// What a surface produced for the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapView {
    /// Drawn output, ready to print.
    Rendered(String),

    /// The surface has not finished drawing yet.
    Loading,
}

/// Anything that can draw a set of markers.
pub trait MapSurface {
    fn render(&self, points: &[MapPoint], dark_mode: bool, zoom: u8) -> MapView;
}

/// Zoom for the current marker set: street level for a single marker,
/// the configured default otherwise.
pub fn effective_zoom(marker_count: usize, config: &MapConfig) -> u8 {
    if marker_count == 1 {
        config.focus_zoom
    } else {
        config.default_zoom
    }
}

/// Plain-text map panel for the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMap;

impl MapSurface for TextMap {
    fn render(&self, points: &[MapPoint], dark_mode: bool, zoom: u8) -> MapView {
        let style = if dark_mode { "dark" } else { "light" };
        let mut out = format!(
            "Map [{style}] zoom {zoom} ({} marker{})\n",
            points.len(),
            if points.len() == 1 { "" } else { "s" }
        );
        for point in points {
            out.push_str(&format!(
                "  • {} ({:.4}, {:.4})\n",
                point.name, point.lat, point.lon
            ));
        }
        if points.is_empty() {
            out.push_str("  (no markers)\n");
        }
        MapView::Rendered(out)
    }
}
