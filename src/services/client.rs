//! Authenticated HTTP client
//!
//! [`ApiClient`] is bound to one backend domain (e.g. `/api/accounting`).
//! Every request it sends passes through the registered interceptors, which
//! is where the bearer token gets attached. There is no retry, no backoff,
//! and no caching: one call in, one HTTP request out.

use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ApiConfig;
use crate::middleware::{BearerAuth, RequestContext, RequestInterceptor};
use crate::state::CredentialProvider;
use crate::utils::errors::{SchoolAdminError, Result};
use crate::utils::logging::{log_request, log_response, log_transport_error};

/// Backend areas, each served under its own path prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Auth,
    Accounting,
    Inquiries,
    Resources,
    Messages,
}

impl Domain {
    pub fn prefix(&self) -> &'static str {
        match self {
            Domain::Auth => "auth",
            Domain::Accounting => "api/accounting",
            Domain::Inquiries => "api/inquiries",
            Domain::Resources => "api/resources",
            Domain::Messages => "api/messages",
        }
    }
}

/// Build the shared reqwest client from configuration
pub fn build_http_client(config: &ApiConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(seconds) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    builder.build().map_err(SchoolAdminError::Transport)
}

/// Join a domain prefix onto the configured base URL, keeping any base path
pub fn domain_base_url(base_url: &str, domain: Domain) -> Result<Url> {
    let joined = format!("{}/{}/", base_url.trim_end_matches('/'), domain.prefix());
    Ok(Url::parse(&joined)?)
}

/// HTTP client bound to one backend domain
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    interceptors: Arc<Vec<Arc<dyn RequestInterceptor>>>,
}

impl ApiClient {
    /// Create a client for `domain` that authenticates with `credentials`
    pub fn for_domain(
        http: Client,
        config: &ApiConfig,
        domain: Domain,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self> {
        let base_url = domain_base_url(&config.base_url, domain)?;
        Ok(Self::new(http, base_url, vec![Arc::new(BearerAuth::new(credentials))]))
    }

    /// Create a client with an explicit interceptor chain
    pub fn new(http: Client, base_url: Url, interceptors: Vec<Arc<dyn RequestInterceptor>>) -> Self {
        Self {
            http,
            base_url,
            interceptors: Arc::new(interceptors),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path relative to the domain base. An empty path is the
    /// collection root (`/api/inquiries/`).
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Start a request; finish it with [`ApiClient::send`]
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        Ok(self.http.request(method, self.url(path)?))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)?).await
    }

    /// GET with query pairs; `None` fields of `query` must be skipped by its
    /// `Serialize` impl so they never reach the URL.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path)?.query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path)?.json(body)).await
    }

    /// POST without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::POST, path)?).await
    }

    /// POST carrying its arguments in the query string and no body
    pub async fn post_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path)?.query(query)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path)?.json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::DELETE, path)?).await
    }

    /// POST a multipart form; its own content type replaces the JSON default
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        self.send(self.request(Method::POST, path)?.multipart(form)).await
    }

    /// Run the interceptors, send the request and decode the JSON body
    pub async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let mut request = builder.build()?;

        let mut ctx = RequestContext::new(request.method().clone(), request.url().clone());
        for (name, value) in request.headers() {
            ctx.headers.insert(name.clone(), value.clone());
        }
        for interceptor in self.interceptors.iter() {
            interceptor.intercept(&mut ctx)?;
        }

        let authenticated = ctx.is_authenticated();
        let RequestContext { method, url, headers } = ctx;
        *request.method_mut() = method.clone();
        *request.url_mut() = url.clone();
        *request.headers_mut() = headers;

        let url = url.to_string();
        log_request(&method, &url, authenticated);
        let started = Instant::now();

        let response = self.http.execute(request).await.map_err(|e| {
            log_transport_error(&method, &url, &e.to_string());
            SchoolAdminError::Transport(e)
        })?;

        let status = response.status();
        log_response(&method, &url, status, started.elapsed().as_millis() as u64);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(SchoolAdminError::from_response_body(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| SchoolAdminError::Decode(format!("{} {}: {}", method, url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::MemoryCredentials;

    fn client(base: &str, domain: Domain) -> ApiClient {
        let mut settings = Settings::default();
        settings.api.base_url = base.to_string();
        let http = build_http_client(&settings.api).unwrap();
        ApiClient::for_domain(http, &settings.api, domain, Arc::new(MemoryCredentials::new())).unwrap()
    }

    #[test]
    fn test_domain_urls() {
        let inquiries = client("http://localhost:8000", Domain::Inquiries);
        assert_eq!(inquiries.url("").unwrap().as_str(), "http://localhost:8000/api/inquiries/");
        assert_eq!(inquiries.url("/42/comments").unwrap().as_str(), "http://localhost:8000/api/inquiries/42/comments");

        let auth = client("http://localhost:8000/", Domain::Auth);
        assert_eq!(auth.url("login").unwrap().as_str(), "http://localhost:8000/auth/login");
    }

    #[test]
    fn test_base_path_is_preserved() {
        let resources = client("https://school.example/backend", Domain::Resources);
        assert_eq!(
            resources.url("upload").unwrap().as_str(),
            "https://school.example/backend/api/resources/upload"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let settings = Settings::default();
        assert!(domain_base_url("::nope::", Domain::Accounting).is_err());
        assert!(domain_base_url(&settings.api.base_url, Domain::Accounting).is_ok());
    }
}
