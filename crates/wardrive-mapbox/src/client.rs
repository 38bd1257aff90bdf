//! Shared HTTP plumbing for the Mapbox API surfaces.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use wardrive_core::AppConfig;

use crate::error::MapboxError;

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/";

/// Client for the Mapbox Directions and Geocoding APIs.
///
/// Holds the HTTP client, the access token, and the base URL. Use
/// [`MapboxClient::new`] for production or [`MapboxClient::with_base_url`]
/// to point at a mock server in tests.
pub struct MapboxClient {
    client: Client,
    pub(crate) base_url: Url,
    pub(crate) token: String,
}

impl MapboxClient {
    /// Creates a client pointed at the production Mapbox API.
    ///
    /// # Errors
    ///
    /// Returns [`MapboxError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, MapboxError> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`MapboxError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MapboxError::Api`] if `base_url` is not
    /// a valid URL base.
    pub fn with_base_url(config: &AppConfig, base_url: &str) -> Result<Self, MapboxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| MapboxError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            token: config.mapbox_token.clone(),
        })
    }

    /// Performs a GET and parses the body as `T`, triaging non-2xx statuses
    /// into typed errors first.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, MapboxError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(MapboxError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| MapboxError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}
