// src/services/saved.rs

//! Saved-destination bookkeeping, all behind bearer auth.
//!
//! The server is the only source of truth here: callers re-fetch the listing
//! after every write instead of patching a local copy.

use serde_json::json;

use crate::error::{AppError, Result};
use crate::models::{City, Session};
use crate::services::client::TravelClient;

impl TravelClient {
    /// Fetch the caller's saved destinations.
    pub async fn saved_destinations(&self, session: &Session) -> Result<Vec<City>> {
        let url = self.endpoint("/api/saved")?;
        let response = Self::authed(self.get(url), session).send().await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    /// Save a destination. Saving twice surfaces the service's
    /// "Destination already saved" rejection.
    pub async fn save_destination(&self, destination_id: &str, session: &Session) -> Result<()> {
        if destination_id.trim().is_empty() {
            return Err(AppError::validation("Destination ID is required"));
        }

        let url = self.endpoint("/api/saved")?;
        let response = Self::authed(self.post(url), session)
            .json(&json!({ "destination_id": destination_id }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        log::info!("Saved destination {destination_id}");
        Ok(())
    }

    /// Remove a destination from the saved list.
    pub async fn remove_destination(&self, destination_id: &str, session: &Session) -> Result<()> {
        if destination_id.trim().is_empty() {
            return Err(AppError::validation("Destination ID is required"));
        }

        let url = self.endpoint(&format!("/api/saved/{destination_id}"))?;
        let response = Self::authed(self.delete(url), session).send().await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        log::info!("Removed destination {destination_id}");
        Ok(())
    }
}
