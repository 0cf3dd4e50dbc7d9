use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::HeaderValue;
use http::header::USER_AGENT;
use http_body_util::{Empty, LengthLimitError};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower::util::BoxCloneSyncService;
use tower::{BoxError, ServiceBuilder, ServiceExt};
use tower_http::decompression::DecompressionLayer;
use tower_http::set_header::SetRequestHeaderLayer;

use crate::client::HttpClient;
use crate::error::HttpError;
use crate::response::collect_limited;

/// User-Agent sent unless [`HttpClientBuilder::user_agent`] overrides it.
pub const DEFAULT_USER_AGENT: &str = concat!("records-http/", env!("CARGO_PKG_VERSION"));

/// Builder for [`HttpClient`].
///
/// Defaults: 30 s timeout, 10 MiB body limit, HTTPS only, idle pooled
/// connections dropped after 90 s, at most 32 of them per host.
#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_body_size: usize,
    user_agent: String,
    allow_insecure_http: bool,
    pool_idle_timeout: Duration,
    pool_max_idle_per_host: usize,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_body_size: 10 * 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            allow_insecure_http: false,
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 32,
        }
    }
}

impl HttpClientBuilder {
    /// Bound on one fetch, from connect until the last body byte.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Limit on the decompressed body.
    #[must_use]
    pub fn max_body_size(mut self, bytes: usize) -> Self {
        self.max_body_size = bytes;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Also accept `http://` URLs.
    #[must_use]
    pub fn allow_insecure_http(mut self, allow: bool) -> Self {
        self.allow_insecure_http = allow;
        self
    }

    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// `0` disables connection reuse.
    #[must_use]
    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Assemble the service stack. No runtime is needed until the first fetch.
    ///
    /// # Errors
    ///
    /// - `HttpError::InvalidUserAgent` if the user agent is not a header value
    /// - `HttpError::Tls` if the webpki root store cannot be loaded
    pub fn build(self) -> Result<HttpClient, HttpError> {
        let user_agent = HeaderValue::try_from(self.user_agent.as_str())?;
        let connector = https_connector(self.allow_insecure_http)?;

        if self.allow_insecure_http {
            tracing::warn!("records http client accepts plain http:// URLs");
        }

        let hyper_client = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .build::<_, Empty<Bytes>>(connector);

        let limit = self.max_body_size;
        let fetch = ServiceBuilder::new()
            .layer(SetRequestHeaderLayer::if_not_present(USER_AGENT, user_agent))
            .layer(DecompressionLayer::new())
            .service(hyper_client)
            .map_err(BoxError::from)
            .and_then(move |response| collect_limited(response, limit));

        // The timeout wraps the body read as well as the round trip.
        let timeout = self.timeout;
        let service = ServiceBuilder::new()
            .layer(TimeoutLayer::new(timeout))
            .service(fetch)
            .map_err(move |err: BoxError| classify_error(err, timeout, limit));

        tracing::debug!(?timeout, max_body_size = limit, "records http client built");

        Ok(HttpClient {
            service: BoxCloneSyncService::new(service),
            allow_insecure_http: self.allow_insecure_http,
        })
    }
}

fn classify_error(err: BoxError, timeout: Duration, limit: usize) -> HttpError {
    if err.is::<Elapsed>() {
        HttpError::Timeout(timeout)
    } else if err.is::<LengthLimitError>() {
        HttpError::BodyTooLarge { limit }
    } else {
        HttpError::Transport(err)
    }
}

/// Webpki roots with the process-wide rustls provider, falling back to a
/// local aws-lc-rs provider that is not installed globally.
fn https_connector(allow_http: bool) -> Result<HttpsConnector<HttpConnector>, HttpError> {
    let provider = rustls::crypto::CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()));

    let builder =
        hyper_rustls::HttpsConnectorBuilder::new().with_provider_and_webpki_roots(provider)?;
    let builder = if allow_http {
        builder.https_or_http()
    } else {
        builder.https_only()
    };
    Ok(builder.enable_all_versions().build())
}
