// src/services/client.rs

//! Shared HTTP plumbing for the Escape Genie API.

use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Session};
use crate::utils::http::create_async_client;

/// Error payload the service attaches to rejected requests.
///
/// Auth and saved-destination endpoints use `msg`, the search endpoint uses
/// `error`; either may be absent on bare status rejections.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the Escape Genie service.
///
/// One instance serves every endpoint; the concern-specific operations live
/// in sibling modules as further `impl` blocks.
#[derive(Debug, Clone)]
pub struct TravelClient {
    client: Client,
    base_url: Url,
}

impl TravelClient {
    /// Create a client for the configured service.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = create_async_client(config)?;
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self { client, base_url })
    }

    /// Resolve an endpoint path against the configured base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.client.post(url)
    }

    pub(crate) fn delete(&self, url: Url) -> RequestBuilder {
        self.client.delete(url)
    }

    /// Attach the session's bearer credential.
    pub(crate) fn authed(builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.bearer_auth(&session.token)
    }

    /// Turn a non-success response into an `AppError::Api` carrying the
    /// server-reported message when one is present.
    pub(crate) async fn rejection(response: Response) -> AppError {
        let status = response.status().as_u16();
        let message = match response.json::<ApiMessage>().await {
            Ok(payload) => payload
                .msg
                .or(payload.error)
                .unwrap_or_else(|| "request rejected".to_string()),
            Err(_) => "request rejected".to_string(),
        };
        AppError::api(status, message)
    }
}
