use std::time::Duration;

use thiserror::Error;

/// Errors produced while building an [`HttpClient`](crate::HttpClient) or
/// fetching through it.
///
/// A response with any status, 4xx and 5xx included, is never an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HttpError {
    #[error("user agent is not a valid header value: {0}")]
    InvalidUserAgent(#[from] http::header::InvalidHeaderValue),

    #[error("TLS setup failed: {0}")]
    Tls(#[from] rustls::Error),

    #[error("plain http is disabled for this client: {url}")]
    InsecureScheme { url: String },

    #[error("unsupported URL scheme '{scheme}'")]
    UnsupportedScheme { scheme: String },

    #[error("could not assemble request: {0}")]
    RequestBuild(#[from] http::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Body exceeded the limit once decompressed.
    #[error("response body exceeds the {limit} byte limit")]
    BodyTooLarge { limit: usize },

    /// Connect, TLS handshake, I/O or protocol failure.
    #[error("transport failure: {0}")]
    Transport(#[source] tower::BoxError),
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = HttpError::Transport(Box::new(io));
        assert_eq!(err.to_string(), "transport failure: connection refused");
        assert!(err.source().is_some_and(|s| s.is::<std::io::Error>()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            HttpError::Timeout(Duration::from_millis(250)).to_string(),
            "request timed out after 250ms"
        );
        assert_eq!(
            HttpError::BodyTooLarge { limit: 10 }.to_string(),
            "response body exceeds the 10 byte limit"
        );
        assert_eq!(
            HttpError::UnsupportedScheme {
                scheme: "ftp".to_owned()
            }
            .to_string(),
            "unsupported URL scheme 'ftp'"
        );
    }
}
