//! Configuration for the managed-records module.

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `MANAGED_RECORDS_BASE_PATH`.
pub const ENV_PREFIX: &str = "MANAGED_RECORDS_";

/// Configuration for the managed-records module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ManagedRecordsConfig {
    /// Listing endpoint the page queries are appended to.
    /// Default: `http://localhost:3000/records`
    pub base_path: String,

    /// Per-request timeout in seconds. Default: 30
    pub request_timeout_secs: u64,

    /// Maximum response body size in bytes. Default: 10 MiB
    pub max_body_size: usize,

    /// Permit plain `http://` base paths. Default: true
    pub allow_insecure_http: bool,

    /// User-Agent sent with every request.
    pub user_agent: String,

    /// Seconds an idle pooled connection is kept. Default: 90
    pub pool_idle_timeout_secs: u64,

    /// Idle pooled connections kept per host; `0` disables reuse. Default: 32
    pub pool_max_idle_per_host: usize,
}

impl Default for ManagedRecordsConfig {
    fn default() -> Self {
        Self {
            base_path: "http://localhost:3000/records".to_owned(),
            request_timeout_secs: 30,
            max_body_size: 10 * 1024 * 1024,
            allow_insecure_http: true,
            user_agent: concat!("managed-records/", env!("CARGO_PKG_VERSION")).to_owned(),
            pool_idle_timeout_secs: 90,
            pool_max_idle_per_host: 32,
        }
    }
}

impl ManagedRecordsConfig {
    /// Layer defaults, an optional YAML file and `MANAGED_RECORDS_*`
    /// environment variables (later sources win).
    ///
    /// # Errors
    ///
    /// Returns a `figment::Error` if the file cannot be parsed or a value has
    /// the wrong type or an unknown key.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX)).extract()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_secs)
    }
}
