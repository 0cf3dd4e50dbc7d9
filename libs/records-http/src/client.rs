use bytes::Bytes;
use http::header::ACCEPT;
use http::{HeaderValue, Request, Response};
use http_body_util::Empty;
use tower::ServiceExt;
use tower::util::BoxCloneSyncService;
use url::Url;

use crate::builder::HttpClientBuilder;
use crate::error::HttpError;
use crate::response::HttpResponse;

type FetchService = BoxCloneSyncService<Request<Empty<Bytes>>, Response<Bytes>, HttpError>;

/// Client for JSON listing endpoints.
///
/// Cloning is cheap and clones share the connection pool; concurrent
/// fetches each drive their own clone of the service.
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) service: FetchService,
    pub(crate) allow_insecure_http: bool,
}

impl HttpClient {
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// GET `url` with `Accept: application/json` and buffer the response.
    ///
    /// # Errors
    ///
    /// - `InsecureScheme`/`UnsupportedScheme` before anything is sent
    /// - `Timeout`, `Transport` or `BodyTooLarge` while fetching
    pub async fn get(&self, url: &Url) -> Result<HttpResponse, HttpError> {
        let allowed = match url.scheme() {
            "https" => true,
            "http" => self.allow_insecure_http,
            other => {
                return Err(HttpError::UnsupportedScheme {
                    scheme: other.to_owned(),
                });
            }
        };
        if !allowed {
            return Err(HttpError::InsecureScheme {
                url: url.to_string(),
            });
        }

        let request = Request::get(url.as_str())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .body(Empty::new())?;

        let response = self.service.clone().oneshot(request).await?;
        Ok(HttpResponse::from(response))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::DEFAULT_USER_AGENT;
    use http::StatusCode;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn plain_http_client() -> HttpClient {
        HttpClient::builder().allow_insecure_http(true).build().unwrap()
    }

    fn url(server: &MockServer, path: &str) -> Url {
        Url::parse(&server.url(path)).unwrap()
    }

    #[tokio::test]
    async fn test_get_sends_accept_and_user_agent() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/records")
                .query_param("limit", "11")
                .header("accept", "application/json")
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(200).body(r#"[{"id":1}]"#);
        });

        let response = plain_http_client()
            .get(&url(&server, "/records?limit=11"))
            .await
            .unwrap();

        m.assert();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(&response.body[..], br#"[{"id":1}]"#);
    }

    #[tokio::test]
    async fn test_configured_user_agent() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).header("user-agent", "dashboard/2.0");
            then.status(200).body("[]");
        });

        let client = HttpClient::builder()
            .allow_insecure_http(true)
            .user_agent("dashboard/2.0")
            .build()
            .unwrap();
        client.get(&url(&server, "/records")).await.unwrap();

        m.assert();
    }

    #[tokio::test]
    async fn test_bad_request_is_a_response() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/records");
            then.status(400).body("unknown color");
        });

        let response = plain_http_client()
            .get(&url(&server, "/records"))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(&response.body[..], b"unknown color");
    }

    #[tokio::test]
    async fn test_oversized_body() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/records");
            then.status(200).body("x".repeat(4096));
        });

        let client = HttpClient::builder()
            .allow_insecure_http(true)
            .max_body_size(1024)
            .build()
            .unwrap();
        let result = client.get(&url(&server, "/records")).await;

        assert!(matches!(result, Err(HttpError::BodyTooLarge { limit: 1024 })));
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/records");
            then.status(200).body("[]").delay(Duration::from_millis(500));
        });

        let client = HttpClient::builder()
            .allow_insecure_http(true)
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let result = client.get(&url(&server, "/records")).await;

        assert!(matches!(result, Err(HttpError::Timeout(d)) if d == Duration::from_millis(50)));
    }

    #[tokio::test]
    async fn test_gzip_body_is_decompressed() {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"[{"id":"a"}]"#).unwrap();
        let compressed = encoder.finish().unwrap();

        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/records");
            then.status(200)
                .header("content-encoding", "gzip")
                .body(compressed);
        });

        let response = plain_http_client()
            .get(&url(&server, "/records"))
            .await
            .unwrap();
        assert_eq!(&response.body[..], br#"[{"id":"a"}]"#);
    }

    #[tokio::test]
    async fn test_closed_port_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let target = Url::parse(&format!("http://127.0.0.1:{port}/records")).unwrap();

        let result = plain_http_client().get(&target).await;
        assert!(matches!(result, Err(HttpError::Transport(_))));
    }

    #[tokio::test]
    async fn test_scheme_checks() {
        let tls_only = HttpClient::builder().build().unwrap();

        let plain = Url::parse("http://localhost:3000/records").unwrap();
        assert!(matches!(
            tls_only.get(&plain).await,
            Err(HttpError::InsecureScheme { url }) if url == "http://localhost:3000/records"
        ));

        let ftp = Url::parse("ftp://localhost/records").unwrap();
        assert!(matches!(
            plain_http_client().get(&ftp).await,
            Err(HttpError::UnsupportedScheme { scheme }) if scheme == "ftp"
        ));
    }
}
