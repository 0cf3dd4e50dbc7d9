use managed_records_sdk::ManagedRecordsError;
use records_http::HttpError;
use thiserror::Error;

/// Failures of a single retrieval.
///
/// A status-400 response is not represented here; it decodes to an empty page.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid base path '{base_path}': {source}")]
    InvalidBasePath {
        base_path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] HttpError),

    #[error("request to records endpoint failed: {0}")]
    Transport(#[from] HttpError),

    #[error("records response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<DomainError> for ManagedRecordsError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::InvalidBasePath { .. } | DomainError::Client(_) => {
                ManagedRecordsError::configuration(err.to_string())
            }
            DomainError::Transport(_) => ManagedRecordsError::transport(err.to_string()),
            DomainError::Decode(_) => ManagedRecordsError::decode(err.to_string()),
        }
    }
}
