// src/services/search.rs

//! Free-text destination search against the recommendation endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::City;
use crate::services::client::TravelClient;

/// Who is travelling.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelerType {
    #[default]
    Solo,
    Couple,
    Family,
    Student,
}

/// Whether the trip crosses borders.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripScope {
    #[default]
    International,
    Domestic,
}

/// Price bracket filter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Budget {
    #[default]
    Any,
    Budget,
    MidRange,
    Luxury,
}

impl std::str::FromStr for TravelerType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "solo" => Ok(Self::Solo),
            "couple" => Ok(Self::Couple),
            "family" => Ok(Self::Family),
            "student" => Ok(Self::Student),
            other => Err(AppError::validation(format!(
                "Unknown traveler type '{other}'; expected solo, couple, family or student"
            ))),
        }
    }
}

impl std::str::FromStr for TripScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "international" => Ok(Self::International),
            "domestic" => Ok(Self::Domestic),
            other => Err(AppError::validation(format!(
                "Unknown trip scope '{other}'; expected international or domestic"
            ))),
        }
    }
}

impl std::str::FromStr for Budget {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "budget" => Ok(Self::Budget),
            "mid-range" => Ok(Self::MidRange),
            "luxury" => Ok(Self::Luxury),
            other => Err(AppError::validation(format!(
                "Unknown budget '{other}'; expected any, budget, mid-range or luxury"
            ))),
        }
    }
}

/// One search query, serialized with the service's camelCase body keys.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub message: String,
    pub traveler_type: TravelerType,
    pub trip_scope: TripScope,
    pub budget: Budget,
}

impl SearchRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

impl TravelClient {
    /// Run a search. An empty message is refused locally; an empty result
    /// list is a legitimate "no matches" answer, not an error.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<City>> {
        if request.message.trim().is_empty() {
            return Err(AppError::validation("Describe the trip first"));
        }

        let url = self.endpoint("/api/chat")?;
        let response = self.post(url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let cities: Vec<City> = response.json().await?;
        log::info!("Search matched {} destinations", cities.len());
        Ok(cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiConfig;

    #[test]
    fn test_request_body_keys() {
        let request = SearchRequest {
            message: "beach getaway".to_string(),
            traveler_type: TravelerType::Couple,
            trip_scope: TripScope::Domestic,
            budget: Budget::MidRange,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["message"], "beach getaway");
        assert_eq!(body["travelerType"], "couple");
        assert_eq!(body["tripScope"], "domestic");
        assert_eq!(body["budget"], "mid-range");
    }

    #[test]
    fn test_request_defaults() {
        let body = serde_json::to_value(SearchRequest::new("skiing")).unwrap();
        assert_eq!(body["travelerType"], "solo");
        assert_eq!(body["tripScope"], "international");
        assert_eq!(body["budget"], "any");
    }

    #[tokio::test]
    async fn test_empty_message_refused_locally() {
        let client = TravelClient::new(&ApiConfig::default()).unwrap();
        let result = client.search(&SearchRequest::new("   ")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("family".parse::<TravelerType>().unwrap(), TravelerType::Family);
        assert_eq!("Domestic".parse::<TripScope>().unwrap(), TripScope::Domestic);
        assert_eq!("mid-range".parse::<Budget>().unwrap(), Budget::MidRange);
        assert!("weekend".parse::<TravelerType>().is_err());
    }
}
