//! Client-side persisted state
//!
//! This module owns the bearer token storage consulted before every request.

pub mod credentials;

pub use credentials::{CredentialProvider, FileCredentialStore, MemoryCredentials, TOKEN_KEY};
