//! Scoring gateway configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Scoring gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the scoring API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Memoise catalog, samples and records for the process lifetime
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,
}

impl GatewayConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate gateway configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__BASE_URL"));
        }
        let is_https = self.base_url.starts_with("https://");
        if !is_https && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidGatewayUrl);
        }
        if *environment == Environment::Production && !is_https {
            return Err(ValidationError::GatewayMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            cache_enabled: default_cache_enabled(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_cache_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.cache_enabled);
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = GatewayConfig {
            timeout_secs: 5,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = GatewayConfig {
            base_url: "https://scoring.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://scoring.example.com");
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = GatewayConfig {
            base_url: "ftp://scoring".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidGatewayUrl)
        ));
    }

    #[test]
    fn test_validation_requires_https_in_production() {
        let config = GatewayConfig::default();
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::GatewayMustBeHttps)
        ));
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = GatewayConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }
}
