//! Authentication middleware
//!
//! Attaches the bearer token from the configured credential provider to
//! every outgoing request.

use reqwest::header::{HeaderValue, AUTHORIZATION};
use std::sync::Arc;
use tracing::debug;

use super::{RequestContext, RequestInterceptor};
use crate::state::CredentialProvider;
use crate::utils::errors::{SchoolAdminError, Result};

/// Sets `Authorization: Bearer <token>` when a token is stored
#[derive(Debug, Clone)]
pub struct BearerAuth {
    credentials: Arc<dyn CredentialProvider>,
}

impl BearerAuth {
    /// Create a new BearerAuth interceptor
    pub fn new(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { credentials }
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, ctx: &mut RequestContext) -> Result<()> {
        // A failed read aborts the request instead of sending it anonymously.
        match self.credentials.token()? {
            Some(token) if !token.is_empty() => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| SchoolAdminError::Credentials("stored token is not a valid header value".to_string()))?;
                value.set_sensitive(true);
                ctx.headers.insert(AUTHORIZATION, value);
            }
            _ => {
                debug!(url = %ctx.url, "No access token stored, sending request without authorization");
                ctx.headers.remove(AUTHORIZATION);
            }
        }
        Ok(())
    }
}
