//! Venue data structures for the destination-detail view.

use serde::{Deserialize, Deserializer, Serialize};

/// Venue category attached to curated rows.
///
/// Provider-sourced rows omit the field; the grouped response keys carry the
/// categorization in that case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VenueCategory {
    Attraction,
    Restaurant,
}

/// A point of interest near a destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    /// Venue identifier. Curated rows carry integers, provider rows carry
    /// place-id strings or nothing at all; normalized to a string here.
    #[serde(default, deserialize_with = "venue_id")]
    pub id: Option<String>,

    /// Venue display name
    pub name: String,

    /// Street address, or the service's "Address not available" placeholder
    #[serde(default)]
    pub address: String,

    /// Outbound directions link built by the service
    #[serde(default, rename = "Maps_url")]
    pub maps_url: Option<String>,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Category, present on curated rows only
    #[serde(default)]
    pub category: Option<VenueCategory>,
}

impl Venue {
    /// Stable selection key: the id when present, the name otherwise.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// Venues for one destination, grouped the way the service returns them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CityVenues {
    #[serde(default)]
    pub attractions: Vec<Venue>,

    #[serde(default)]
    pub restaurants: Vec<Venue>,
}

impl CityVenues {
    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty() && self.restaurants.is_empty()
    }

    /// All venues, attractions first, both groups in service order.
    pub fn all(&self) -> impl Iterator<Item = &Venue> {
        self.attractions.iter().chain(self.restaurants.iter())
    }

    /// Find a venue by selection key or case-insensitive name.
    pub fn find(&self, needle: &str) -> Option<&Venue> {
        self.all()
            .find(|v| v.key() == needle)
            .or_else(|| self.all().find(|v| v.name.eq_ignore_ascii_case(needle)))
    }
}

/// Accept both the curated integer ids and the provider's string place-ids.
fn venue_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Int(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}
