// src/view/project.rs

//! State snapshot to screen model, as a pure function.

use crate::detail::DetailState;
use crate::map::{self, MapPoint};
use crate::models::{MapConfig, MarkerPolicy, Venue};
use crate::view::format::{rating_summary, review_date, stars};
use crate::view::model::{
    DetailScreen, ListPane, MapPane, ReviewFormView, ReviewRow, ReviewsPane, VenueRow,
    VenueSection,
};

const ATTRACTIONS_HEADING: &str = "Attractions & Landmarks";
const RESTAURANTS_HEADING: &str = "Restaurants & Cafes";

/// Derive the full three-pane screen from a state snapshot.
pub fn build_detail_screen(
    state: &DetailState,
    map_config: &MapConfig,
    dark_mode: bool,
) -> DetailScreen {
    let points = marker_points(state, map_config.marker_policy);
    let zoom = map::effective_zoom(points.len(), map_config);

    DetailScreen {
        title: state
            .city
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default(),
        rating: rating_summary(state.average_rating(), state.reviews.len()),
        list: list_pane(state),
        map: MapPane {
            visible: state.is_expanded,
            points,
            zoom,
            dark_mode,
        },
        reviews: reviews_pane(state),
    }
}

/// Markers for the map pane.
///
/// A selected venue always wins and is shown alone. With no selection the
/// policy decides: every fetched venue (attractions first, both groups in
/// service order), or nothing at all.
fn marker_points(state: &DetailState, policy: MarkerPolicy) -> Vec<MapPoint> {
    if let Some(venue) = &state.selected_venue {
        return vec![MapPoint::from(venue)];
    }
    match policy {
        MarkerPolicy::AllVenues => state.venues.all().map(MapPoint::from).collect(),
        MarkerPolicy::SelectedOnly => Vec::new(),
    }
}

fn list_pane(state: &DetailState) -> ListPane {
    if state.is_loading {
        return ListPane {
            loading: true,
            sections: Vec::new(),
        };
    }

    let mut sections = Vec::new();
    if !state.venues.attractions.is_empty() {
        sections.push(section(ATTRACTIONS_HEADING, &state.venues.attractions));
    }
    if !state.venues.restaurants.is_empty() {
        sections.push(section(RESTAURANTS_HEADING, &state.venues.restaurants));
    }

    ListPane {
        loading: false,
        sections,
    }
}

fn section(heading: &str, venues: &[Venue]) -> VenueSection {
    VenueSection {
        heading: heading.to_string(),
        rows: venues
            .iter()
            .map(|venue| VenueRow {
                key: venue.key().to_string(),
                name: venue.name.clone(),
                address: venue.address.clone(),
                directions_url: venue.maps_url.clone(),
            })
            .collect(),
    }
}

fn reviews_pane(state: &DetailState) -> ReviewsPane {
    ReviewsPane {
        visible: state.is_expanded,
        entries: state
            .reviews
            .iter()
            .map(|review| ReviewRow {
                username: review.username.clone(),
                stars: stars(review.rating),
                comment: review.comment.clone(),
                date: review_date(review),
            })
            .collect(),
        form: ReviewFormView {
            rating: state.draft.rating,
            stars: stars(state.draft.rating),
            comment: state.draft.comment.clone(),
            submitting: state.is_submitting,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::DetailPhase;
    use crate::models::{City, CityVenues, Review};

    fn make_city() -> City {
        City {
            id: "paris001".to_string(),
            name: "Paris".to_string(),
            city: None,
            country: Some("France".to_string()),
            description: String::new(),
            tags: None,
            lat: 48.8566,
            lon: 2.3522,
            cost_tier: None,
        }
    }

    fn make_venue(name: &str, address: &str) -> Venue {
        Venue {
            id: None,
            name: name.to_string(),
            address: address.to_string(),
            maps_url: Some(format!("https://maps.example/{name}")),
            lat: 48.8584,
            lon: 2.2945,
            category: None,
        }
    }

    fn make_review(username: &str, rating: u8, comment: &str) -> Review {
        Review {
            id: 1,
            username: username.to_string(),
            rating,
            comment: comment.to_string(),
            timestamp: "2024-06-01 10:00:00".to_string(),
        }
    }

    fn ready_state(venues: CityVenues, reviews: Vec<Review>) -> DetailState {
        DetailState {
            phase: DetailPhase::Ready,
            city: Some(make_city()),
            venues,
            reviews,
            is_loading: false,
            ..DetailState::default()
        }
    }

    #[test]
    fn test_paris_scenario() {
        let state = ready_state(
            CityVenues {
                attractions: vec![make_venue("Eiffel Tower", "Champ de Mars")],
                restaurants: Vec::new(),
            },
            vec![make_review("bob", 5, "Amazing!")],
        );
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        assert_eq!(screen.title, "Paris");
        assert_eq!(screen.rating.label, "5.0 (1 reviews)");
        assert_eq!(screen.rating.stars, "★★★★★");
        assert_eq!(screen.list.sections.len(), 1);
        assert_eq!(screen.list.sections[0].heading, "Attractions & Landmarks");
        assert_eq!(screen.list.sections[0].rows.len(), 1);
        assert_eq!(screen.list.sections[0].rows[0].name, "Eiffel Tower");
        assert_eq!(screen.list.sections[0].rows[0].address, "Champ de Mars");
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let state = ready_state(
            CityVenues {
                attractions: Vec::new(),
                restaurants: vec![
                    make_venue("Le Bistro", "12 Rue Cler"),
                    make_venue("Chez Anna", "3 Rue Oberkampf"),
                ],
            },
            Vec::new(),
        );
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        assert_eq!(screen.list.sections.len(), 1);
        assert_eq!(screen.list.sections[0].heading, "Restaurants & Cafes");
        assert_eq!(screen.list.sections[0].rows.len(), 2);
    }

    #[test]
    fn test_loading_hides_sections() {
        let mut state = ready_state(
            CityVenues {
                attractions: vec![make_venue("Eiffel Tower", "Champ de Mars")],
                restaurants: Vec::new(),
            },
            Vec::new(),
        );
        state.is_loading = true;
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        assert!(screen.list.loading);
        assert!(screen.list.sections.is_empty());
    }

    #[test]
    fn test_no_ratings_sentinel() {
        let state = ready_state(CityVenues::default(), Vec::new());
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        assert_eq!(screen.rating.label, "No ratings yet (0 reviews)");
        assert_eq!(screen.rating.stars, "");
    }

    #[test]
    fn test_panes_hidden_until_expanded() {
        let state = ready_state(CityVenues::default(), Vec::new());
        let screen = build_detail_screen(&state, &MapConfig::default(), true);
        assert!(!screen.map.visible);
        assert!(!screen.reviews.visible);

        let mut expanded = state;
        expanded.is_expanded = true;
        let screen = build_detail_screen(&expanded, &MapConfig::default(), true);
        assert!(screen.map.visible);
        assert!(screen.reviews.visible);
    }

    #[test]
    fn test_all_venues_policy_before_selection() {
        let state = ready_state(
            CityVenues {
                attractions: vec![make_venue("Eiffel Tower", "Champ de Mars")],
                restaurants: vec![make_venue("Le Bistro", "12 Rue Cler")],
            },
            Vec::new(),
        );
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        // attractions first, then restaurants
        let names: Vec<&str> = screen.map.points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Eiffel Tower", "Le Bistro"]);
        assert_eq!(screen.map.zoom, MapConfig::default().default_zoom);
    }

    #[test]
    fn test_selection_narrows_markers_and_zooms() {
        let mut state = ready_state(
            CityVenues {
                attractions: vec![make_venue("Eiffel Tower", "Champ de Mars")],
                restaurants: vec![make_venue("Le Bistro", "12 Rue Cler")],
            },
            Vec::new(),
        );
        state.selected_venue = Some(make_venue("Le Bistro", "12 Rue Cler"));
        state.is_expanded = true;
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        assert_eq!(screen.map.points.len(), 1);
        assert_eq!(screen.map.points[0].name, "Le Bistro");
        assert_eq!(screen.map.zoom, MapConfig::default().focus_zoom);
    }

    #[test]
    fn test_selected_only_policy() {
        let config = MapConfig {
            marker_policy: MarkerPolicy::SelectedOnly,
            ..MapConfig::default()
        };
        let mut state = ready_state(
            CityVenues {
                attractions: vec![make_venue("Eiffel Tower", "Champ de Mars")],
                restaurants: Vec::new(),
            },
            Vec::new(),
        );

        let screen = build_detail_screen(&state, &config, true);
        assert!(screen.map.points.is_empty());

        state.selected_venue = Some(make_venue("Eiffel Tower", "Champ de Mars"));
        let screen = build_detail_screen(&state, &config, true);
        assert_eq!(screen.map.points.len(), 1);
    }

    #[test]
    fn test_review_entries_keep_server_order() {
        let state = ready_state(
            CityVenues::default(),
            vec![
                make_review("carol", 4, "newest"),
                make_review("bob", 5, "older"),
            ],
        );
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        let authors: Vec<&str> = screen
            .reviews
            .entries
            .iter()
            .map(|r| r.username.as_str())
            .collect();
        assert_eq!(authors, vec!["carol", "bob"]);
        assert_eq!(screen.reviews.entries[0].stars, "★★★★☆");
        assert_eq!(screen.reviews.entries[0].date, "2024-06-01");
    }

    #[test]
    fn test_form_mirrors_draft() {
        let mut state = ready_state(CityVenues::default(), Vec::new());
        state.draft.rating = 3;
        state.draft.comment = "Pretty good".to_string();
        state.is_submitting = true;
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        let form = &screen.reviews.form;
        assert_eq!(form.rating, 3);
        assert_eq!(form.stars, "★★★☆☆");
        assert_eq!(form.comment, "Pretty good");
        assert!(form.submitting);
    }

    #[test]
    fn test_row_key_falls_back_to_name() {
        let mut venue = make_venue("Eiffel Tower", "Champ de Mars");
        venue.id = Some("42".to_string());
        let state = ready_state(
            CityVenues {
                attractions: vec![venue, make_venue("Arc de Triomphe", "Place Charles de Gaulle")],
                restaurants: Vec::new(),
            },
            Vec::new(),
        );
        let screen = build_detail_screen(&state, &MapConfig::default(), true);

        let rows = &screen.list.sections[0].rows;
        assert_eq!(rows[0].key, "42");
        assert_eq!(rows[1].key, "Arc de Triomphe");
    }
}
