/// Application configuration resolved from the environment.
///
/// Credentials for both upstream services plus client tuning knobs. Built
/// by [`crate::load_app_config`]; treated as read-only afterwards.
#[derive(Clone)]
pub struct AppConfig {
    /// WiGLE API name (the account identifier half of the credential pair).
    pub wigle_api_name: String,
    /// WiGLE API token.
    pub wigle_api_token: String,
    /// Mapbox access token, shared by directions and geocoding.
    pub mapbox_token: String,
    pub request_timeout_secs: u64,
    /// Rows requested per WiGLE search page.
    pub wigle_page_size: usize,
    /// Attempt budget for one page or chunk request.
    pub max_retries: u32,
    /// Fixed pause between retry attempts.
    pub retry_delay_ms: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("wigle_api_name", &self.wigle_api_name)
            .field("wigle_api_token", &"[redacted]")
            .field("mapbox_token", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("wigle_page_size", &self.wigle_page_size)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
