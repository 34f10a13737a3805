pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};
pub use config::{toml_config::TomlConfig, SiteConfig};

pub use adapters::http::HttpPortfolioApi;
pub use crate::core::{
    contact::{ContactFormClient, SubmissionState},
    merge::{merge_fallback, merge_stats, RemoteFields},
    provider::{DataSource, LoadReport, PortfolioProvider},
    site::PortfolioSite,
};
pub use domain::model::{ContactForm, FormField, PortfolioDocument};
pub use utils::error::{PortfolioError, Result, SubmissionError};
