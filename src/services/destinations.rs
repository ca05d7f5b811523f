// src/services/destinations.rs

//! Detail-view data access: venues, reviews and review submission.
//!
//! These three calls deliberately collapse every failure mode. The detail
//! view treats "service down", "rejected" and "nothing there" identically,
//! so reads degrade to empty collections and the write reports plain
//! success/failure. Failures are logged here and nowhere else.

use async_trait::async_trait;
use serde_json::json;

use crate::error::Result;
use crate::models::{City, CityVenues, Review, Session};
use crate::services::client::TravelClient;
use crate::services::DestinationApi;

impl TravelClient {
    async fn try_fetch_venues(&self, city: &City) -> Result<CityVenues> {
        let url = self.endpoint("/api/venues")?;
        let response = self
            .post(url)
            .json(&json!({ "city": city }))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn try_fetch_reviews(&self, city_id: &str) -> Result<Vec<Review>> {
        let url = self.endpoint(&format!("/api/reviews/{city_id}"))?;
        let response = self.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn try_submit_review(
        &self,
        city_id: &str,
        rating: u8,
        comment: &str,
        session: &Session,
    ) -> Result<bool> {
        let url = self.endpoint("/api/reviews")?;
        let body = json!({
            "destination_id": city_id,
            "rating": rating,
            "comment": comment,
            "username": session.username,
        });
        let response = Self::authed(self.post(url), session)
            .json(&body)
            .send()
            .await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl DestinationApi for TravelClient {
    async fn fetch_venues(&self, city: &City) -> CityVenues {
        match self.try_fetch_venues(city).await {
            Ok(venues) => venues,
            Err(e) => {
                log::warn!("Venue fetch for {} failed: {}", city.id, e);
                CityVenues::default()
            }
        }
    }

    async fn fetch_reviews(&self, city_id: &str) -> Vec<Review> {
        match self.try_fetch_reviews(city_id).await {
            Ok(reviews) => reviews,
            Err(e) => {
                log::warn!("Review fetch for {city_id} failed: {e}");
                Vec::new()
            }
        }
    }

    async fn submit_review(
        &self,
        city_id: &str,
        rating: u8,
        comment: &str,
        session: &Session,
    ) -> bool {
        match self.try_submit_review(city_id, rating, comment, session).await {
            Ok(accepted) => accepted,
            Err(e) => {
                log::warn!("Review submission for {city_id} failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiConfig;

    /// Client pointed at a port nothing listens on.
    fn unreachable_client() -> TravelClient {
        let mut config = ApiConfig::default();
        config.base_url = "http://127.0.0.1:1".to_string();
        TravelClient::new(&config).unwrap()
    }

    fn sample_city() -> City {
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

    #[tokio::test]
    async fn test_venue_fetch_collapses_to_empty() {
        let client = unreachable_client();
        let venues = client.fetch_venues(&sample_city()).await;
        assert!(venues.is_empty());
    }

    #[tokio::test]
    async fn test_review_fetch_collapses_to_empty() {
        let client = unreachable_client();
        assert!(client.fetch_reviews("paris001").await.is_empty());
    }

    #[tokio::test]
    async fn test_submission_collapses_to_false() {
        let client = unreachable_client();
        let session = Session::new("token", "bob");
        assert!(!client.submit_review("paris001", 5, "Great", &session).await);
    }
}
