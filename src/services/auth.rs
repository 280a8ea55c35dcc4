//! Authentication service implementation
//!
//! This service handles login and registration against `/auth`. Tokens are
//! opaque here: nothing is hashed, validated or refreshed client-side.

use tracing::{debug, info, warn};

use super::client::ApiClient;
use crate::models::{AuthResult, LoginCredentials, User, UserCreate};
use crate::utils::errors::Result;

/// Authentication service for login and registration
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in with email and password.
    ///
    /// On rejection the error displays exactly the server's `detail` text.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResult> {
        debug!(email = %credentials.email, "Logging in");

        match self.client.post::<AuthResult, _>("login", credentials).await {
            Ok(auth) => {
                info!(user_id = auth.user.id, role = %auth.user.role, "Login successful");
                Ok(auth)
            }
            Err(e) => {
                warn!(email = %credentials.email, error = %e, "Login failed");
                Err(e)
            }
        }
    }

    /// Register a new user account
    pub async fn register(&self, new_user: &UserCreate) -> Result<User> {
        debug!(email = %new_user.email, role = %new_user.role, "Registering user");

        let user: User = self.client.post("register", new_user).await?;
        info!(user_id = user.id, "User registered");
        Ok(user)
    }
}
