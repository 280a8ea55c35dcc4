//! Middleware module
//!
//! Request interceptors run on every outgoing request before it is handed
//! to the HTTP client. Each one receives an explicit [`RequestContext`] and
//! may rewrite its headers or abort the request with an error.

pub mod auth;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use std::fmt;

use crate::utils::errors::Result;

// Re-export commonly used middleware
pub use auth::BearerAuth;

/// A request about to be sent
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl RequestContext {
    /// New context carrying the default `Content-Type: application/json` header
    pub fn new(method: Method, url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self { method, url, headers }
    }

    /// Header value as text, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }
}

/// Hook executed before each request is sent
pub trait RequestInterceptor: Send + Sync + fmt::Debug {
    fn intercept(&self, ctx: &mut RequestContext) -> Result<()>;
}
