//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{SchoolAdminError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_credentials_config(&settings.credentials)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(SchoolAdminError::Config(
            "API base URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.base_url)
        .map_err(|e| SchoolAdminError::Config(format!("Invalid API base URL '{}': {}", config.base_url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SchoolAdminError::Config(
            format!("API base URL must use http or https, got '{}'", parsed.scheme())
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(SchoolAdminError::Config(
            "API timeout must be greater than 0 when set".to_string()
        ));
    }

    Ok(())
}

/// Validate credential storage configuration
fn validate_credentials_config(config: &super::CredentialsConfig) -> Result<()> {
    if config.store_path.is_empty() {
        return Err(SchoolAdminError::Config(
            "Credential store path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SchoolAdminError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SchoolAdminError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
