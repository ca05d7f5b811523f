// src/view/format.rs

//! Text formatting for the detail screen.

use crate::map::{MapSurface, MapView};
use crate::models::Review;
use crate::view::model::{DetailScreen, RatingSummary};

/// Star glyphs for a rating: filled up to the rating, empty up to five.
pub fn stars(filled: u8) -> String {
    let filled = usize::from(filled.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Header summary for the review collection.
///
/// With at least one review the label carries the mean to one decimal and
/// the glyphs round it to the nearest whole star. With none, the sentinel
/// replaces the number and no glyphs are shown at all.
pub fn rating_summary(average: Option<f64>, count: usize) -> RatingSummary {
    match average {
        Some(avg) => {
            let rounded = avg.round().clamp(0.0, 5.0) as u8;
            RatingSummary {
                stars: stars(rounded),
                label: format!("{avg:.1} ({count} reviews)"),
            }
        }
        None => RatingSummary {
            stars: String::new(),
            label: format!("No ratings yet ({count} reviews)"),
        },
    }
}

/// Display date for a review: the parsed day, or the raw timestamp when it
/// doesn't parse.
pub fn review_date(review: &Review) -> String {
    match review.posted_at() {
        Some(at) => at.format("%Y-%m-%d").to_string(),
        None => review.timestamp.clone(),
    }
}

/// Draw the whole screen as terminal text, pane by pane.
pub fn render_screen(screen: &DetailScreen, surface: &dyn MapSurface) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {} ==\n", screen.title));
    if screen.rating.stars.is_empty() {
        out.push_str(&format!("{}\n\n", screen.rating.label));
    } else {
        out.push_str(&format!("{}  {}\n\n", screen.rating.stars, screen.rating.label));
    }

    if screen.list.loading {
        out.push_str("Loading...\n");
    } else {
        for section in &screen.list.sections {
            out.push_str(&format!("{}\n", section.heading));
            for row in &section.rows {
                out.push_str(&format!("  • {}\n", row.name));
                if !row.address.is_empty() {
                    out.push_str(&format!("    {}\n", row.address));
                }
                if let Some(url) = &row.directions_url {
                    out.push_str(&format!("    Directions: {url}\n"));
                }
            }
            out.push('\n');
        }
    }

    if screen.map.visible {
        match surface.render(&screen.map.points, screen.map.dark_mode, screen.map.zoom) {
            MapView::Rendered(map) => out.push_str(&map),
            MapView::Loading => out.push_str("(map still loading)\n"),
        }
        out.push('\n');
    }

    if screen.reviews.visible {
        out.push_str("Reviews\n");
        if screen.reviews.entries.is_empty() {
            out.push_str("  No reviews yet. Be the first!\n");
        } else {
            for entry in &screen.reviews.entries {
                out.push_str(&format!("  {} {}\n", entry.username, entry.stars));
                if !entry.comment.is_empty() {
                    out.push_str(&format!("    {}\n", entry.comment));
                }
                out.push_str(&format!("    {}\n", entry.date));
            }
        }
        out.push('\n');

        let form = &screen.reviews.form;
        out.push_str("Leave a Review\n");
        out.push_str(&format!("  {}\n", form.stars));
        if form.comment.is_empty() {
            out.push_str("  Share your experience...\n");
        } else {
            out.push_str(&format!("  {}\n", form.comment));
        }
        out.push_str(if form.submitting {
            "  [Submitting...]\n"
        } else {
            "  [Submit Review]\n"
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{DetailPhase, DetailState};
    use crate::map::TextMap;
    use crate::models::{City, MapConfig};
    use crate::view::build_detail_screen;

    #[test]
    fn test_star_glyphs() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        // bad data clamps instead of panicking
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_rating_label_one_decimal() {
        let summary = rating_summary(Some(13.0 / 3.0), 3);
        assert_eq!(summary.label, "4.3 (3 reviews)");
        assert_eq!(summary.stars, "★★★★☆");
    }

    #[test]
    fn test_rating_rounds_half_up() {
        let summary = rating_summary(Some(4.5), 2);
        assert_eq!(summary.label, "4.5 (2 reviews)");
        assert_eq!(summary.stars, "★★★★★");
    }

    #[test]
    fn test_rating_sentinel() {
        let summary = rating_summary(None, 0);
        assert_eq!(summary.label, "No ratings yet (0 reviews)");
        assert_eq!(summary.stars, "");
    }

    #[test]
    fn test_review_date_fallback() {
        let review = Review {
            id: 1,
            username: "bob".to_string(),
            rating: 5,
            comment: String::new(),
            timestamp: "last tuesday".to_string(),
        };
        assert_eq!(review_date(&review), "last tuesday");
    }

    #[test]
    fn test_render_screen_smoke() {
        let state = DetailState {
            phase: DetailPhase::Ready,
            city: Some(City {
                id: "paris001".to_string(),
                name: "Paris".to_string(),
                city: None,
                country: None,
                description: String::new(),
                tags: None,
                lat: 48.8566,
                lon: 2.3522,
                cost_tier: None,
            }),
            is_expanded: true,
            is_loading: false,
            ..DetailState::default()
        };
        let screen = build_detail_screen(&state, &MapConfig::default(), true);
        let text = render_screen(&screen, &TextMap);

        assert!(text.contains("== Paris =="));
        assert!(text.contains("No ratings yet (0 reviews)"));
        assert!(text.contains("No reviews yet. Be the first!"));
        assert!(text.contains("Leave a Review"));
        assert!(text.contains("[Submit Review]"));
        assert!(text.contains("Share your experience..."));
    }

    #[test]
    fn test_render_screen_loading() {
        let state = DetailState {
            phase: DetailPhase::Loading,
            city: Some(City {
                id: "paris001".to_string(),
                name: "Paris".to_string(),
                city: None,
                country: None,
                description: String::new(),
                tags: None,
                lat: 48.8566,
                lon: 2.3522,
                cost_tier: None,
            }),
            is_loading: true,
            ..DetailState::default()
        };
        let screen = build_detail_screen(&state, &MapConfig::default(), false);
        let text = render_screen(&screen, &TextMap);

        assert!(text.contains("Loading..."));
        // collapsed view: no map or review panes yet
        assert!(!text.contains("Reviews"));
        assert!(!text.contains("Map ["));
    }
}
