//! Authenticated session context.

use serde::{Deserialize, Serialize};

/// Bearer credential plus the username it was issued to.
///
/// Passed explicitly into every authenticated call; nothing in the client
/// reads credentials from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }
}
