//! Public API trait for the managed-records module.

use async_trait::async_trait;

use crate::error::ManagedRecordsError;
use crate::models::{PageSummary, RetrieveOptions};

/// Client for retrieving summarized pages of records.
///
/// Implementations issue at most one request per call and hold no state
/// that is shared between calls, so concurrent calls are independent.
///
/// ```ignore
/// let summary = client.retrieve(None).await?;           // page 1, no color filter
/// let maybe = client.retrieve_or_none(Some(options)).await;
/// ```
#[async_trait]
pub trait ManagedRecordsClient: Send + Sync {
    /// Retrieve and summarize one page of records.
    ///
    /// `None` options mean page 1 with no color filter.
    ///
    /// # Errors
    ///
    /// - `Transport` if the endpoint could not be reached
    /// - `Decode` if the response body is not a list of records
    async fn retrieve(
        &self,
        options: Option<RetrieveOptions>,
    ) -> Result<PageSummary, ManagedRecordsError>;

    /// Best-effort variant of [`retrieve`](Self::retrieve).
    ///
    /// Failures are logged by the implementation and reported as `None`, so
    /// "no summary" is a distinguishable outcome rather than an error.
    async fn retrieve_or_none(&self, options: Option<RetrieveOptions>) -> Option<PageSummary> {
        self.retrieve(options).await.ok()
    }
}
