use std::time::Duration;

use crate::error::ConfigError;

pub const API_URL_VAR: &str = "NGO_CONNECT_API_URL";
pub const TIMEOUT_VAR: &str = "NGO_CONNECT_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest timeout whose milliseconds still fit a browser `setTimeout` delay.
pub const MAX_TIMEOUT_SECS: u64 = i32::MAX as u64 / 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend REST API, without a trailing slash.
    pub api_base_url: String,
    /// Client-side timeout applied to every request.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reads the configuration from the environment.
    ///
    /// Native builds read the variables at runtime, the browser build has them baked in at
    /// compile time. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(target_arch = "wasm32")]
        let (api_url, timeout) = (
            option_env!("NGO_CONNECT_API_URL").map(str::to_string),
            option_env!("NGO_CONNECT_TIMEOUT_SECS").map(str::to_string),
        );

        #[cfg(not(target_arch = "wasm32"))]
        let (api_url, timeout) = (
            std::env::var(API_URL_VAR).ok(),
            std::env::var(TIMEOUT_VAR).ok(),
        );

        Self::from_values(api_url.as_deref(), timeout.as_deref())
    }

    fn from_values(api_url: Option<&str>, timeout: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match api_url {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::MissingEnvVar(API_URL_VAR.to_string()))
            }
            Some(url) => Self::new(url.trim()),
            None => Self::default(),
        };

        if let Some(secs) = timeout {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnvValue {
                    var: TIMEOUT_VAR.to_string(),
                    reason: e.to_string(),
                })?;
            if secs == 0 {
                return Err(ConfigError::InvalidEnvValue {
                    var: TIMEOUT_VAR.to_string(),
                    reason: "timeout must be greater than zero".to_string(),
                });
            }
            if secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidEnvValue {
                    var: TIMEOUT_VAR.to_string(),
                    reason: format!("timeout must not exceed {} seconds", MAX_TIMEOUT_SECS),
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Absolute URL for an API path such as `/ngos/4`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_values(None, None).unwrap();

        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let config = ClientConfig::from_values(Some("https://api.example.org/api/"), None).unwrap();

        assert_eq!(config.api_base_url, "https://api.example.org/api");
        assert_eq!(config.url("/ngos"), "https://api.example.org/api/ngos");
        assert_eq!(config.url("ngos"), "https://api.example.org/api/ngos");
    }

    #[test]
    fn rejects_unparsable_timeout() {
        let result = ClientConfig::from_values(None, Some("ten"));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == TIMEOUT_VAR
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(ClientConfig::from_values(None, Some("0")).is_err());
    }

    #[test]
    fn rejects_timeout_beyond_browser_timer_range() {
        let too_long = (MAX_TIMEOUT_SECS + 1).to_string();

        assert!(matches!(
            ClientConfig::from_values(None, Some(&too_long)),
            Err(ConfigError::InvalidEnvValue { ref reason, .. }) if reason.contains("exceed")
        ));
        assert!(ClientConfig::from_values(None, Some(&MAX_TIMEOUT_SECS.to_string())).is_ok());
    }

    #[test]
    fn rejects_blank_api_url() {
        assert!(matches!(
            ClientConfig::from_values(Some(" "), None),
            Err(ConfigError::MissingEnvVar(_))
        ));
    }
}
