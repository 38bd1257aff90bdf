use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to pick up `.env` files before reading
/// the environment.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let wigle_api_name = require("WARDRIVE_WIGLE_API_NAME")?;
    let wigle_api_token = require("WARDRIVE_WIGLE_API_TOKEN")?;
    let mapbox_token = require("WARDRIVE_MAPBOX_TOKEN")?;

    let request_timeout_secs = parse_u64("WARDRIVE_REQUEST_TIMEOUT_SECS", "30")?;
    let wigle_page_size = parse_usize("WARDRIVE_WIGLE_PAGE_SIZE", "100")?;
    let max_retries = parse_u32("WARDRIVE_MAX_RETRIES", "3")?;
    let retry_delay_ms = parse_u64("WARDRIVE_RETRY_DELAY_MS", "2000")?;
    let user_agent = or_default("WARDRIVE_USER_AGENT", "wardrive/0.1 (survey-planner)");
    let log_level = or_default("WARDRIVE_LOG_LEVEL", "info");

    Ok(AppConfig {
        wigle_api_name,
        wigle_api_token,
        mapbox_token,
        request_timeout_secs,
        wigle_page_size,
        max_retries,
        retry_delay_ms,
        user_agent,
        log_level,
    })
}
