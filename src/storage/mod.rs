//! Persisted client state.
//!
//! Two small stores live under the state directory:
//! - `session.json` - key/value store for the session token, username and
//!   theme preference
//! - `results.json` - the latest search results, so later commands can
//!   resolve a city without re-searching
//!
//! Both are written atomically (temp file, then rename) so an interrupted
//! command never leaves a torn file behind.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Session;

// Re-export for convenience
pub use local::{FileSessionStore, ResultsCache};

/// Store key for the bearer token.
pub const KEY_TOKEN: &str = "token";
/// Store key for the logged-in username.
pub const KEY_USERNAME: &str = "username";
/// Store key for the persisted theme preference.
pub const KEY_DARK_MODE: &str = "dark_mode";

/// Trait for persisted key/value session state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a value, `None` when the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// The stored session, when both token and username are present.
    async fn session(&self) -> Result<Option<Session>> {
        let token = self.get(KEY_TOKEN).await?;
        let username = self.get(KEY_USERNAME).await?;
        Ok(match (token, username) {
            (Some(token), Some(username)) => Some(Session::new(token, username)),
            _ => None,
        })
    }

    /// Persist a session.
    async fn store_session(&self, session: &Session) -> Result<()> {
        self.set(KEY_TOKEN, &session.token).await?;
        self.set(KEY_USERNAME, &session.username).await
    }

    /// Drop the stored session, keeping unrelated keys.
    async fn clear_session(&self) -> Result<()> {
        self.remove(KEY_TOKEN).await?;
        self.remove(KEY_USERNAME).await
    }

    /// The stored theme preference, falling back to the given default.
    async fn dark_mode(&self, default: bool) -> Result<bool> {
        Ok(match self.get(KEY_DARK_MODE).await?.as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        })
    }

    /// Persist the theme preference.
    async fn set_dark_mode(&self, on: bool) -> Result<()> {
        self.set(KEY_DARK_MODE, if on { "true" } else { "false" })
            .await
    }
}
