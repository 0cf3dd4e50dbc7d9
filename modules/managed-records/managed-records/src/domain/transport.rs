//! Transport seam between the retrieval pipeline and the network.

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use url::Url;

use super::error::DomainError;

/// Status and fully read body of a listing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs the single GET issued per retrieval.
///
/// Implementations return every HTTP status as `Ok`; `Err` is reserved for
/// failures to obtain a response at all.
#[async_trait]
pub trait RecordsTransport: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<TransportResponse, DomainError>;
}
