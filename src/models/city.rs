//! Destination data structure.

use serde::{Deserialize, Serialize};

/// A travel destination returned by the recommendation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    /// Stable destination identifier (e.g., "paris001")
    pub id: String,

    /// Display name
    pub name: String,

    /// City name, usually identical to `name`
    #[serde(default)]
    pub city: Option<String>,

    /// Country name
    #[serde(default)]
    pub country: Option<String>,

    /// Short description shown alongside search results
    #[serde(default)]
    pub description: String,

    /// Comma-separated interest tags used by the search backend
    #[serde(default)]
    pub tags: Option<String>,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Price bracket: "budget", "mid-range" or "luxury"
    #[serde(default)]
    pub cost_tier: Option<String>,
}

impl City {
    /// "Name, Country" label for listings, falling back to the name alone.
    pub fn label(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }

    /// Interest tags split into individual keywords.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_row() {
        let json = r#"{
            "id": "paris001",
            "name": "Paris",
            "city": "Paris",
            "country": "France",
            "description": "The iconic City of Love.",
            "tags": "romance,art,luxury",
            "lat": 48.8566,
            "lon": 2.3522,
            "cost_tier": "luxury"
        }"#;
        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city.id, "paris001");
        assert_eq!(city.label(), "Paris, France");
        assert_eq!(city.tag_list(), vec!["romance", "art", "luxury"]);
        assert_eq!(city.cost_tier.as_deref(), Some("luxury"));
    }

    #[test]
    fn test_deserialize_minimal_row() {
        let json = r#"{"id": "x1", "name": "Somewhere", "lat": 1.0, "lon": 2.0}"#;
        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city.label(), "Somewhere");
        assert!(city.tag_list().is_empty());
        assert!(city.description.is_empty());
    }
}
