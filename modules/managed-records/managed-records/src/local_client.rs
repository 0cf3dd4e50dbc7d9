//! Local client implementing the `ManagedRecordsClient` trait.

use std::sync::Arc;

use async_trait::async_trait;
use managed_records_sdk::{ManagedRecordsClient, ManagedRecordsError, PageSummary, RetrieveOptions};
use url::Url;

use crate::config::ManagedRecordsConfig;
use crate::domain::error::DomainError;
use crate::domain::service::Service;
use crate::infra::HttpRecordsTransport;

/// Local client for the managed-records module.
///
/// Delegates to the domain [`Service`] and maps its errors into
/// [`ManagedRecordsError`].
pub struct ManagedRecordsLocalClient {
    service: Arc<Service>,
}

impl ManagedRecordsLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    /// Wire configuration into an HTTP-backed client.
    ///
    /// # Errors
    ///
    /// Returns `ManagedRecordsError::Configuration` if the base path is not an
    /// absolute URL or the HTTP client cannot be built.
    pub fn from_config(config: &ManagedRecordsConfig) -> Result<Self, ManagedRecordsError> {
        let base_path =
            Url::parse(&config.base_path).map_err(|source| DomainError::InvalidBasePath {
                base_path: config.base_path.clone(),
                source,
            })?;
        let transport = HttpRecordsTransport::from_config(config).map_err(DomainError::Client)?;

        tracing::info!(base_path = %base_path, "managed records client configured");

        Ok(Self::new(Arc::new(Service::new(
            Arc::new(transport),
            base_path,
        ))))
    }
}

#[async_trait]
impl ManagedRecordsClient for ManagedRecordsLocalClient {
    async fn retrieve(
        &self,
        options: Option<RetrieveOptions>,
    ) -> Result<PageSummary, ManagedRecordsError> {
        self.service
            .retrieve(options)
            .await
            .map_err(ManagedRecordsError::from)
    }
}
