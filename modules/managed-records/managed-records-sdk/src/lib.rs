//! Managed Records SDK
//!
//! This crate provides the public API for the `managed-records` module:
//! - `ManagedRecordsClient` trait for consumers
//! - `RetrieveOptions` caller input (color filter and page number)
//! - `PageSummary` output consumed by UIs
//! - `ManagedRecordsError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use managed_records_sdk::{ManagedRecordsClient, RetrieveOptions};
//!
//! let options = RetrieveOptions::new().page(2).colors(["red", "brown"]);
//! let summary = client.retrieve(Some(options)).await?;
//!
//! println!("ids on this page: {:?}", summary.ids);
//! if let Some(next) = summary.next_page {
//!     println!("more records on page {next}");
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::ManagedRecordsClient;
pub use error::ManagedRecordsError;
pub use models::{Disposition, OpenRecord, PageSummary, Record, RecordId, RetrieveOptions};
