//! Environment-driven configuration for the geocoding client.

use thiserror::Error;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const DEFAULT_REGION: &str = "in";
const DEFAULT_USER_AGENT: &str = "vendloc/0.1 (marketplace-locations)";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Structured-provider API key. When absent that provider is skipped
    /// entirely and only the free-text fallback runs.
    pub google_api_key: Option<String>,
    /// Region bias passed to the structured provider.
    pub region: String,
    /// Per-request timeout; a timed-out provider is treated the same as
    /// an unreachable one.
    pub timeout_secs: u64,
    /// Sent on every request; the free-text provider rejects requests
    /// without one.
    pub user_agent: String,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            region: DEFAULT_REGION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Load configuration from environment variables, reading `.env` first.
///
/// # Errors
///
/// Returns [`ConfigError`] when a set variable has an invalid value.
pub fn load_config() -> Result<GeocodeConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load configuration from process environment variables only (no `.env`).
///
/// # Errors
///
/// Returns [`ConfigError`] when a set variable has an invalid value.
pub fn load_config_from_env() -> Result<GeocodeConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Core parsing/validation, decoupled from the actual environment so it
/// can be tested with a pure lookup.
fn build_config<F>(lookup: F) -> Result<GeocodeConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let google_api_key = lookup("VENDLOC_GOOGLE_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());

    let region =
        lookup("VENDLOC_GEOCODE_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

    let timeout_secs = match lookup("VENDLOC_GEOCODE_TIMEOUT_SECS") {
        Ok(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::InvalidEnvVar {
                var: "VENDLOC_GEOCODE_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            }
        })?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    let user_agent =
        lookup("VENDLOC_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

    Ok(GeocodeConfig {
        google_api_key,
        region,
        timeout_secs,
        user_agent,
    })
}
