//! Error handling for the school admin client
//!
//! This module defines the error type shared by every service and the
//! helpers used to turn a failed HTTP response into a caller-visible error.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for school admin operations
#[derive(Error, Debug)]
pub enum SchoolAdminError {
    /// No response was received from the backend.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. Displays as the
    /// server-provided detail text and nothing else.
    #[error("{detail}")]
    Api { status: StatusCode, detail: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Credential store error: {0}")]
    Credentials(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for school admin operations
pub type Result<T> = std::result::Result<T, SchoolAdminError>;

impl From<config::ConfigError> for SchoolAdminError {
    fn from(err: config::ConfigError) -> Self {
        SchoolAdminError::Config(err.to_string())
    }
}

impl SchoolAdminError {
    /// Build an API error from a failed response's status and raw body
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        SchoolAdminError::Api {
            status,
            detail: extract_detail(status, body),
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SchoolAdminError::Api { status, .. } => Some(*status),
            SchoolAdminError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Server-provided detail text for API errors
    pub fn detail(&self) -> Option<&str> {
        match self {
            SchoolAdminError::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether the backend rejected the credentials or token
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SchoolAdminError::Config(_) => ErrorSeverity::Critical,
            SchoolAdminError::Credentials(_) => ErrorSeverity::Critical,
            SchoolAdminError::InvalidInput(_) => ErrorSeverity::Info,
            SchoolAdminError::Api { status, .. } if status.is_client_error() => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Pull the human-readable message out of an error body.
///
/// The backend answers `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "..."}, ...]}` for request validation failures.
fn extract_detail(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if !messages.is_empty() {
                    return messages.join("; ");
                }
            }
            _ => {}
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
