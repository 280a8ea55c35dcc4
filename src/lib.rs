//! School Admin client
//!
//! Typed client for the school-management backend: authentication,
//! accounting, inquiries, learning resources and messaging. Every request
//! carries the bearer token supplied by an injectable credential provider.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{SchoolAdminError, Result};

// Re-export main components for easy access
pub use services::{ApiClient, ServiceFactory};
pub use state::{CredentialProvider, FileCredentialStore, MemoryCredentials};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
