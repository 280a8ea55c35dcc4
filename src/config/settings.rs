//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Backend address used when nothing overrides it
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the backend base URL
pub const API_URL_ENV: &str = "SCHOOL_API_URL";

/// Prefix for environment overrides of any other setting
pub const ENV_PREFIX: &str = "SCHOOL_ADMIN";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub credentials: CredentialsConfig,
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. Unset means requests wait for the backend.
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

/// Persisted credential storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialsConfig {
    pub store_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("school_admin")
    }

    /// Load settings using the given config file name (extension optional)
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.user_agent", defaults.api.user_agent)?
            .set_default("credentials.store_path", defaults.credentials.store_path)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_override_option("api.base_url", std::env::var(API_URL_ENV).ok())?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SchoolAdminError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
                timeout_seconds: None,
                user_agent: format!("school-admin/{}", env!("CARGO_PKG_VERSION")),
            },
            credentials: CredentialsConfig {
                store_path: ".school-admin/credentials.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
                directory: None,
            },
        }
    }
}
