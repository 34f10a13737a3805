use crate::config::{
    SiteConfig, DEFAULT_BACKEND_URL, DEFAULT_STATUS_RESET_SECONDS, DEFAULT_TIMEOUT_SECONDS,
};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: BackendSection,
    pub contact: Option<ContactSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSection {
    pub url: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSection {
    pub status_reset_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BACKEND_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_site_config(self) -> SiteConfig {
        SiteConfig {
            backend_url: self
                .backend
                .url
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            request_timeout_seconds: self
                .backend
                .request_timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            status_reset_seconds: self
                .contact
                .and_then(|c| c.status_reset_seconds)
                .unwrap_or(DEFAULT_STATUS_RESET_SECONDS),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_site_config().validate()
    }
}
