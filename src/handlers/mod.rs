//! Handlers module
//!
//! This module contains the user-facing flows built on top of the services:
//! - Login form validation and submission
//! - Console commands for the `school-admin` binary

pub mod login;
pub mod commands;

// Re-export commonly used handler types
pub use login::{FieldErrors, LoginFlow, LoginForm, LoginOutcome, landing_route};
pub use commands::{Command, handle_command};
