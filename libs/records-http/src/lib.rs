#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Buffered JSON GETs against record listing endpoints.
//!
//! One [`HttpClient::get`] issues exactly one request (no retries, no
//! redirects) through a tower stack of
//! `Timeout -> User-Agent -> Decompression -> hyper` and returns the status
//! together with the whole, size-capped body. Non-2xx statuses are ordinary
//! responses.
//!
//! ```ignore
//! let client = records_http::HttpClient::builder()
//!     .allow_insecure_http(true)
//!     .build()?;
//! let url = url::Url::parse("http://localhost:3000/records?limit=11&offset=0")?;
//! let response = client.get(&url).await?;
//! println!("{} ({} bytes)", response.status, response.body.len());
//! ```

mod builder;
mod client;
mod error;
mod response;

pub use builder::{DEFAULT_USER_AGENT, HttpClientBuilder};
pub use client::HttpClient;
pub use error::HttpError;
pub use response::HttpResponse;
