//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Escape Genie API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Map pane behavior
    #[serde(default)]
    pub map: MapConfig,

    /// Presentation settings
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        if url::Url::parse(&self.api.base_url).is_err() {
            return Err(AppError::validation("api.base_url is not a valid URL"));
        }
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.map.default_zoom == 0 {
            return Err(AppError::validation("map.default_zoom must be > 0"));
        }
        if self.map.focus_zoom == 0 {
            return Err(AppError::validation("map.focus_zoom must be > 0"));
        }
        Ok(())
    }
}

/// HTTP settings for talking to the Escape Genie service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Which venues appear as markers on the detail-view map.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPolicy {
    /// Every fetched venue until one is selected, then only the selection.
    #[default]
    AllVenues,

    /// No markers until a venue is selected.
    SelectedOnly,
}

/// Map pane behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Marker selection policy
    #[serde(default)]
    pub marker_policy: MarkerPolicy,

    /// Zoom level when several markers are shown
    #[serde(default = "defaults::default_zoom")]
    pub default_zoom: u8,

    /// Tighter zoom level when exactly one marker is shown
    #[serde(default = "defaults::focus_zoom")]
    pub focus_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            marker_policy: MarkerPolicy::default(),
            default_zoom: defaults::default_zoom(),
            focus_zoom: defaults::focus_zoom(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Dark theme unless the stored preference says otherwise
    #[serde(default = "defaults::dark_mode")]
    pub dark_mode: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: defaults::dark_mode(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "http://127.0.0.1:5000".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; EscapeGenie/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Map defaults
    pub fn default_zoom() -> u8 {
        15
    }
    pub fn focus_zoom() -> u8 {
        14
    }

    // UI defaults
    pub fn dark_mode() -> bool {
        true
    }
}
