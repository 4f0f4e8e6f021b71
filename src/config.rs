//! Client configuration resolved at build time.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled. Parsing is kept separate from
//! capture so it can be unit-tested with arbitrary inputs.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Errors produced while parsing configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin shared by every REST call site, without a trailing `/`.
    pub api_base_url: String,
    /// OAuth client id for Google Identity Services. The Google button is
    /// hidden when absent.
    pub google_client_id: Option<String>,
}

impl AppConfig {
    /// Build config from the values captured at compile time.
    ///
    /// - `TECHNIANS_API_BASE_URL`: default `http://localhost:5000`
    /// - `TECHNIANS_GOOGLE_CLIENT_ID`: optional
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an `http(s)` URL.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("TECHNIANS_API_BASE_URL"), option_env!("TECHNIANS_GOOGLE_CLIENT_ID"))
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an `http(s)` URL.
    pub fn from_values(api_base_url: Option<&str>, google_client_id: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(api_base_url)?;
        let google_client_id = google_client_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);
        Ok(Self { api_base_url, google_client_id })
    }

    /// Config used when the build-time values are unusable.
    #[must_use]
    pub fn fallback() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), google_client_id: None }
    }

    /// Resolve the build-time config, logging and falling back on parse errors.
    #[must_use]
    pub fn load() -> Self {
        match Self::from_build_env() {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("invalid build config, using defaults: {e}");
                Self::fallback()
            }
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::Parse(format!("TECHNIANS_API_BASE_URL must be an http(s) URL, got '{raw}'")));
    }
    let trimmed = raw.trim_end_matches('/');
    if trimmed.ends_with(':') || trimmed.ends_with("//") {
        return Err(ConfigError::Parse(format!("TECHNIANS_API_BASE_URL has no host: '{raw}'")));
    }
    Ok(trimmed.to_owned())
}
