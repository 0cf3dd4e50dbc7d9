//! Retrieval orchestration.

use std::sync::Arc;

use managed_records_sdk::{PageSummary, Record, RetrieveOptions};
use url::Url;

use super::aggregate::aggregate;
use super::decoder::decode_records;
use super::error::DomainError;
use super::options::normalize;
use super::query::translate;
use super::transport::RecordsTransport;
use crate::infra::url_builder::build_request_url;

/// Retrieves one page of records and summarizes it.
///
/// The base path is fixed at construction; the service holds no mutable
/// state, so one instance can serve concurrent calls.
pub struct Service {
    transport: Arc<dyn RecordsTransport>,
    base_path: Url,
}

impl Service {
    #[must_use]
    pub fn new(transport: Arc<dyn RecordsTransport>, base_path: Url) -> Self {
        Self {
            transport,
            base_path,
        }
    }

    #[must_use]
    pub fn base_path(&self) -> &Url {
        &self.base_path
    }

    /// Normalize, translate, fetch, decode and aggregate one page.
    ///
    /// The summary is computed for the requested page, never for a page the
    /// endpoint might echo back. Failures are logged here before returning.
    ///
    /// # Errors
    ///
    /// - `DomainError::Transport` if the request could not be completed
    /// - `DomainError::Decode` if the body is not a list of records
    pub async fn retrieve(
        &self,
        options: Option<RetrieveOptions>,
    ) -> Result<PageSummary, DomainError> {
        let query = normalize(options);
        let params = translate(&query);
        let url = build_request_url(&self.base_path, &params);

        tracing::debug!(%url, page = query.page.get(), "retrieving records page");

        match self.fetch_records(&url).await {
            Ok(records) => Ok(aggregate(records, query.page)),
            Err(err) => {
                tracing::error!(error = %err, %url, "something went wrong retrieving records");
                Err(err)
            }
        }
    }

    /// Like [`retrieve`](Self::retrieve), reporting any failure as `None`.
    pub async fn retrieve_or_none(&self, options: Option<RetrieveOptions>) -> Option<PageSummary> {
        self.retrieve(options).await.ok()
    }

    async fn fetch_records(&self, url: &Url) -> Result<Vec<Record>, DomainError> {
        let response = self.transport.fetch(url).await?;
        decode_records(&response)
    }
}
