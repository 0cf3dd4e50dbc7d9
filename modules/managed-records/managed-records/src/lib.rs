//! Managed Records Module Implementation
//!
//! Retrieves one page of records from a listing endpoint and reshapes it into
//! a [`PageSummary`] for UIs:
//!
//! 1. options are normalized (page 1, no color filter by default)
//! 2. the page is translated into `limit`/`offset`/`color[]` parameters,
//!    over-fetching one record to detect a further page
//! 3. the response is decoded (status 400 means an empty page)
//! 4. records are aggregated into ids, open records flagged by primary color,
//!    a count of closed primary records and previous/next page cursors
//!
//! The public API is defined in `managed-records-sdk` and re-exported here.
//!
//! ```ignore
//! use managed_records::{ManagedRecordsConfig, ManagedRecordsLocalClient};
//! use managed_records::{ManagedRecordsClient, RetrieveOptions};
//!
//! let config = ManagedRecordsConfig::load(None)?;
//! let client = ManagedRecordsLocalClient::from_config(&config)?;
//! let summary = client.retrieve(Some(RetrieveOptions::new().page(2))).await?;
//! ```

pub use managed_records_sdk::{
    Disposition, ManagedRecordsClient, ManagedRecordsError, OpenRecord, PageSummary, Record,
    RecordId, RetrieveOptions,
};

pub mod config;
pub mod local_client;

pub use config::ManagedRecordsConfig;
pub use local_client::ManagedRecordsLocalClient;

#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
