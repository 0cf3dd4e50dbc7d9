//! [`RecordsTransport`] backed by `records-http`.

use async_trait::async_trait;
use records_http::{HttpClient, HttpError};
use url::Url;

use crate::config::ManagedRecordsConfig;
use crate::domain::error::DomainError;
use crate::domain::transport::{RecordsTransport, TransportResponse};

pub struct HttpRecordsTransport {
    client: HttpClient,
}

impl HttpRecordsTransport {
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the HTTP client from module configuration.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if TLS setup fails or the User-Agent is invalid.
    pub fn from_config(config: &ManagedRecordsConfig) -> Result<Self, HttpError> {
        let client = HttpClient::builder()
            .timeout(config.request_timeout())
            .max_body_size(config.max_body_size)
            .user_agent(config.user_agent.as_str())
            .allow_insecure_http(config.allow_insecure_http)
            .pool_idle_timeout(config.pool_idle_timeout())
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl RecordsTransport for HttpRecordsTransport {
    async fn fetch(&self, url: &Url) -> Result<TransportResponse, DomainError> {
        let response = self.client.get(url).await?;
        tracing::debug!(
            status = %response.status,
            bytes = response.body.len(),
            "records endpoint responded"
        );
        Ok(TransportResponse::new(response.status, response.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn transport() -> HttpRecordsTransport {
        HttpRecordsTransport::from_config(&ManagedRecordsConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_status_and_body() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/records")
                .header("accept", "application/json");
            then.status(200).json_body(json!([{"id": 1}]));
        });

        let url = Url::parse(&server.url("/records")).unwrap();
        let response = transport().fetch(&url).await.unwrap();

        m.assert();
        assert_eq!(response.status, http::StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_fetch_passes_error_statuses_through() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/records");
            then.status(400).body("bad color");
        });

        let url = Url::parse(&server.url("/records")).unwrap();
        let response = transport().fetch(&url).await.unwrap();

        assert_eq!(response.status, http::StatusCode::BAD_REQUEST);
        assert_eq!(&response.body[..], b"bad color");
    }

    #[tokio::test]
    async fn test_tls_only_config_rejects_plain_http() {
        let config = ManagedRecordsConfig {
            allow_insecure_http: false,
            ..ManagedRecordsConfig::default()
        };
        let transport = HttpRecordsTransport::from_config(&config).unwrap();

        let url = Url::parse("http://localhost:3000/records").unwrap();
        let result = transport.fetch(&url).await;

        assert!(matches!(
            result,
            Err(DomainError::Transport(HttpError::InsecureScheme { .. }))
        ));
    }
}
