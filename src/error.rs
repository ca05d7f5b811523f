// src/error.rs

//! Unified error handling for the Escape Genie client.

use std::fmt;

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or unusable stored session
    #[error("Session error: {0}")]
    Session(String),

    /// Review submission declined or failed
    #[error("Submission error: {0}")]
    Submission(String),

    /// Rejection reported by the Escape Genie API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a session error.
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
    }

    /// Create a submission error.
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission(message.into())
    }

    /// Create an API rejection with the server-reported message.
    pub fn api(status: u16, message: impl fmt::Display) -> Self {
        Self::Api {
            status,
            message: message.to_string(),
        }
    }
}
