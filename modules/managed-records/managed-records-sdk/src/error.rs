//! Error types for the managed-records module.

use thiserror::Error;

/// Errors returned by [`ManagedRecordsClient`](crate::ManagedRecordsClient).
///
/// A status-400 response from the listing endpoint is not an error; it
/// yields an empty [`PageSummary`](crate::PageSummary).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagedRecordsError {
    /// The client could not be set up (bad base path, TLS, header values).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The listing endpoint could not be reached or timed out.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a list of records.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ManagedRecordsError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
