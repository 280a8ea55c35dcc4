//! Services module
//!
//! One service per backend domain, each holding its own [`ApiClient`].

pub mod client;
pub mod auth;
pub mod accounting;
pub mod inquiry;
pub mod resource;
pub mod messaging;

// Re-export commonly used services
pub use client::{ApiClient, Domain};
pub use auth::AuthService;
pub use accounting::AccountingService;
pub use inquiry::InquiryService;
pub use resource::ResourceService;
pub use messaging::MessagingService;

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::state::CredentialProvider;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub accounting_service: AccountingService,
    pub inquiry_service: InquiryService,
    pub resource_service: ResourceService,
    pub messaging_service: MessagingService,
    credentials: Arc<dyn CredentialProvider>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized.
    ///
    /// Every domain client shares one connection pool and reads its bearer
    /// token from `credentials`.
    pub fn new(settings: &Settings, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let http = client::build_http_client(&settings.api)?;
        let domain_client =
            |domain| ApiClient::for_domain(http.clone(), &settings.api, domain, credentials.clone());

        Ok(Self {
            auth_service: AuthService::new(domain_client(Domain::Auth)?),
            accounting_service: AccountingService::new(domain_client(Domain::Accounting)?),
            inquiry_service: InquiryService::new(domain_client(Domain::Inquiries)?),
            resource_service: ResourceService::new(domain_client(Domain::Resources)?),
            messaging_service: MessagingService::new(domain_client(Domain::Messages)?),
            credentials,
        })
    }

    /// The credential provider shared by all services
    pub fn credentials(&self) -> Arc<dyn CredentialProvider> {
        self.credentials.clone()
    }
}
