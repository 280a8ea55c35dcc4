//! Mock school backend for testing
//!
//! Wraps a wiremock server and builds a [`ServiceFactory`] pointed at it.

use serde_json::Value;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use school_admin::config::Settings;
use school_admin::state::{CredentialProvider, MemoryCredentials};
use school_admin::ServiceFactory;

/// Mock backend server
pub struct SchoolApiMock {
    pub server: MockServer,
    pub base_url: String,
}

impl SchoolApiMock {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Settings pointing every domain at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.base_url.clone();
        settings
    }

    pub fn services(&self, credentials: Arc<dyn CredentialProvider>) -> ServiceFactory {
        ServiceFactory::new(&self.settings(), credentials).expect("service factory")
    }

    /// Services with no token stored
    pub fn anonymous_services(&self) -> (ServiceFactory, Arc<MemoryCredentials>) {
        let credentials = Arc::new(MemoryCredentials::new());
        (self.services(credentials.clone()), credentials)
    }

    /// Services that already hold `token`
    pub fn services_with_token(&self, token: &str) -> (ServiceFactory, Arc<MemoryCredentials>) {
        let credentials = Arc::new(MemoryCredentials::with_token(token));
        (self.services(credentials.clone()), credentials)
    }

    /// Answer `verb path` with `status` and a JSON body
    pub async fn respond(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Every request the server has seen so far
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// The single request the server has seen
    pub async fn only_request(&self) -> Request {
        let mut requests = self.received().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

/// Header value of a recorded request, as text
pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Query keys of a recorded request
pub fn query_keys(request: &Request) -> Vec<String> {
    request.url.query_pairs().map(|(key, _)| key.into_owned()).collect()
}

/// Body of a recorded request parsed as JSON
pub fn json_body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body is JSON")
}
