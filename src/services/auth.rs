// src/services/auth.rs

//! Account registration and login.

use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::models::Session;
use crate::services::client::TravelClient;

/// Minimum password length accepted at registration time.
const MIN_PASSWORD_CHARS: usize = 5;

/// Success payload of `/api/login`.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    username: String,
}

impl TravelClient {
    /// Log in and obtain a session.
    ///
    /// Server rejections ("Bad username or password") come back as
    /// [`AppError::Api`] with the service's own message.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        require_credentials(username, password)?;

        let url = self.endpoint("/api/login")?;
        let response = self
            .post(url)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let payload: LoginResponse = response.json().await?;
        log::info!("Logged in as {}", payload.username);
        Ok(Session::new(payload.access_token, payload.username))
    }

    /// Create an account.
    ///
    /// The length floor is enforced here before any request goes out, same
    /// as the service's own registration form does.
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        require_credentials(username, password)?;
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AppError::validation(format!(
                "Password must be at least {MIN_PASSWORD_CHARS} characters long"
            )));
        }

        let url = self.endpoint("/api/register")?;
        let response = self
            .post(url)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        log::info!("Registered account {username}");
        Ok(())
    }
}

fn require_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::validation("Username and password are required"));
    }
    Ok(())
}
