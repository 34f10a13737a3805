#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_STATUS_RESET_SECONDS: u64 = 10;

/// Settings read once at startup and passed to the provider and the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct SiteConfig {
    /// Base URL of the portfolio API
    #[cfg_attr(
        feature = "cli",
        arg(long, env = "PORTFOLIO_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)
    )]
    pub backend_url: String,

    /// Upper bound for every backend call, in seconds
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS))]
    pub request_timeout_seconds: u64,

    /// How long a contact form outcome stays visible, in seconds
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_STATUS_RESET_SECONDS))]
    pub status_reset_seconds: u64,
}

impl SiteConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            status_reset_seconds: DEFAULT_STATUS_RESET_SECONDS,
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn api_base_url(&self) -> &str {
        &self.backend_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    fn status_reset_delay(&self) -> Duration {
        Duration::from_secs(self.status_reset_seconds)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend_url", &self.backend_url)?;
        validate_range("request_timeout_seconds", self.request_timeout_seconds, 1, 300)?;
        validate_range("status_reset_seconds", self.status_reset_seconds, 1, 300)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.api_base_url(), "http://localhost:8001/api");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.status_reset_delay(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(SiteConfig::new("localhost").validate().is_err());

        let config = SiteConfig {
            request_timeout_seconds: 0,
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
