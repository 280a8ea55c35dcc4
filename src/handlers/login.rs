//! Login form handling
//!
//! Models the login screen: field validation happens locally and blocks
//! submission, a valid form is sent to `/auth/login`, and a successful login
//! stores the token and picks the landing route for the user's role.

use regex::Regex;
use reqwest::StatusCode;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

use crate::models::{AuthResult, LoginCredentials, UserRole};
use crate::services::AuthService;
use crate::state::CredentialProvider;
use crate::utils::errors::{SchoolAdminError, Result};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email pattern must compile: {}", e))
    })
}

/// Whether `email` looks like an address
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Landing route after login, e.g. `/admin`
pub fn landing_route(role: UserRole) -> String {
    format!("/{}", role.as_str())
}

/// Field-level invalid markers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn email_invalid(&self) -> bool {
        self.email.is_some()
    }

    pub fn password_invalid(&self) -> bool {
        self.password.is_some()
    }
}

/// Contents of the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate both fields without touching the network
    pub fn validate(&self) -> FieldErrors {
        let email = self.email.trim();
        let email_error = if email.is_empty() {
            Some("Email is required".to_string())
        } else if !is_valid_email(email) {
            Some("Enter a valid email address".to_string())
        } else {
            None
        };

        let password_error = if self.password.is_empty() {
            Some("Password is required".to_string())
        } else {
            None
        };

        FieldErrors {
            email: email_error,
            password: password_error,
        }
    }

    fn credentials(&self) -> LoginCredentials {
        LoginCredentials::new(self.email.trim(), self.password.clone())
    }
}

/// Result of submitting the login form
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Validation failed; nothing was sent
    Invalid(FieldErrors),
    /// The backend refused the login; `alert` is its detail text
    Rejected { status: StatusCode, alert: String },
    /// Token stored; navigate to `route`
    LoggedIn { route: String, auth: AuthResult },
}

/// Drives the login form against the auth service
#[derive(Debug, Clone)]
pub struct LoginFlow {
    auth_service: AuthService,
    credentials: Arc<dyn CredentialProvider>,
}

impl LoginFlow {
    pub fn new(auth_service: AuthService, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            auth_service,
            credentials,
        }
    }

    /// Validate, log in, persist the token and pick the landing route.
    ///
    /// Transport failures and credential store failures are returned as
    /// errors; a refusal from the backend is a [`LoginOutcome::Rejected`].
    pub async fn submit(&self, form: &LoginForm) -> Result<LoginOutcome> {
        let errors = form.validate();
        if !errors.is_empty() {
            debug!(
                email_invalid = errors.email_invalid(),
                password_invalid = errors.password_invalid(),
                "Login form failed validation"
            );
            return Ok(LoginOutcome::Invalid(errors));
        }

        let auth = match self.auth_service.login(&form.credentials()).await {
            Ok(auth) => auth,
            Err(SchoolAdminError::Api { detail, status }) => {
                warn!(status = status.as_u16(), "Login rejected by backend");
                return Ok(LoginOutcome::Rejected { status, alert: detail });
            }
            Err(e) => return Err(e),
        };

        self.credentials.store_token(&auth.access_token)?;
        let route = landing_route(auth.user.role);
        info!(user_id = auth.user.id, route = %route, "Logged in");

        Ok(LoginOutcome::LoggedIn { route, auth })
    }

    /// Forget the stored token
    pub fn logout(&self) -> Result<()> {
        self.credentials.clear_token()?;
        info!("Logged out");
        Ok(())
    }
}
