//! HTTP client for the WiGLE network-search API.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use wardrive_core::{AppConfig, BoundingBox, NetworkTypeFilter};

use crate::error::WigleError;
use crate::types::SearchResponse;

const DEFAULT_BASE_URL: &str = "https://api.wigle.net/";
const SEARCH_PATH: &str = "api/v2/network/search";

/// Client for the WiGLE REST API.
///
/// Holds the HTTP client, the Basic-auth credential pair, and the page
/// size. Use [`WigleClient::new`] for production or
/// [`WigleClient::with_base_url`] to point at a mock server in tests.
pub struct WigleClient {
    client: Client,
    base_url: Url,
    api_name: String,
    api_token: String,
    pub(crate) page_size: usize,
}

impl WigleClient {
    /// Creates a client pointed at the production WiGLE API.
    ///
    /// # Errors
    ///
    /// Returns [`WigleError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, WigleError> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`WigleError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`WigleError::Api`] if `base_url` is not
    /// a valid URL base.
    pub fn with_base_url(config: &AppConfig, base_url: &str) -> Result<Self, WigleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so joins append to the root
        // path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| WigleError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_name: config.wigle_api_name.clone(),
            api_token: config.wigle_api_token.clone(),
            page_size: config.wigle_page_size,
        })
    }

    /// Fetches one page of search results at the given row offset.
    ///
    /// # Errors
    ///
    /// - [`WigleError::CredentialsRejected`] — HTTP 401/403.
    /// - [`WigleError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`WigleError::Api`] — the envelope reports `success: false`.
    /// - [`WigleError::Deserialize`] — body is not the expected shape.
    /// - [`WigleError::Http`] — network or TLS failure.
    pub(crate) async fn search_page(
        &self,
        area: BoundingBox,
        filter: NetworkTypeFilter,
        offset: usize,
    ) -> Result<SearchResponse, WigleError> {
        let url = self.search_url(area, filter, offset)?;

        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.api_name, Some(&self.api_token))
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(WigleError::CredentialsRejected {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(WigleError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed =
            serde_json::from_str::<SearchResponse>(&body).map_err(|e| WigleError::Deserialize {
                context: format!("network search at offset {offset}"),
                source: e,
            })?;

        if !parsed.success {
            return Err(WigleError::Api(
                parsed
                    .message
                    .unwrap_or_else(|| "no reason given".to_owned()),
            ));
        }

        Ok(parsed)
    }

    fn search_url(
        &self,
        area: BoundingBox,
        filter: NetworkTypeFilter,
        offset: usize,
    ) -> Result<Url, WigleError> {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .map_err(|e| WigleError::Api(format!("invalid search URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("latrange1", &area.southwest.latitude.to_string())
            .append_pair("latrange2", &area.northeast.latitude.to_string())
            .append_pair("longrange1", &area.southwest.longitude.to_string())
            .append_pair("longrange2", &area.northeast.longitude.to_string())
            .append_pair("resultsPerPage", &self.page_size.to_string())
            .append_pair("first", &offset.to_string());

        match filter {
            NetworkTypeFilter::Open => {
                url.query_pairs_mut().append_pair("freenet", "true");
            }
            NetworkTypeFilter::Secure => {
                url.query_pairs_mut().append_pair("freenet", "false");
            }
            NetworkTypeFilter::All => {}
        }

        Ok(url)
    }
}
