//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured logging
//! helpers used by the HTTP layer.

use reqwest::{Method, StatusCode};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{Result, SchoolAdminError};

/// Initialize logging based on configuration
///
/// When a log directory is configured the returned guard must be kept alive
/// for the lifetime of the program, otherwise buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| SchoolAdminError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "school-admin.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SchoolAdminError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing API request
pub fn log_request(method: &Method, url: &str, authenticated: bool) {
    debug!(
        method = %method,
        url = url,
        authenticated = authenticated,
        "Sending API request"
    );
}

/// Log a completed API response
pub fn log_response(method: &Method, url: &str, status: StatusCode, duration_ms: u64) {
    if status.is_success() {
        debug!(
            method = %method,
            url = url,
            status = status.as_u16(),
            duration_ms = duration_ms,
            "API request completed"
        );
    } else {
        warn!(
            method = %method,
            url = url,
            status = status.as_u16(),
            duration_ms = duration_ms,
            "API request failed"
        );
    }
}

/// Log a transport failure (no response received)
pub fn log_transport_error(method: &Method, url: &str, error: &str) {
    warn!(
        method = %method,
        url = url,
        error = error,
        "API request did not complete"
    );
}
