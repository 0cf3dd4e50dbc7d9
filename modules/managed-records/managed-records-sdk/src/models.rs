//! Public models for the managed-records module.
//!
//! Wire shapes follow the listing endpoint and the UI contract: records are
//! passed through with all their fields, summaries serialize in camelCase.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a record as returned by the listing endpoint.
///
/// The endpoint may use either JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Categorical status of a record.
///
/// Only `open` and `closed` carry meaning; anything else is kept verbatim
/// in `Other` and is excluded from both summary buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Open,
    Closed,
    Other(String),
}

impl Disposition {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Other(other) => other,
        }
    }
}

impl From<&str> for Disposition {
    fn from(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "closed" => Self::Closed,
            _ => Self::Other(value.to_owned()),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record returned by the listing endpoint.
///
/// Everything but `id` stays in `fields` exactly as received, so a record
/// re-serializes unchanged even when `disposition` or `color` is `null`, a
/// number or missing. Such values simply match neither bucket nor a primary
/// color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Create a record with only an id.
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    #[must_use]
    pub fn with_disposition(self, disposition: &str) -> Self {
        self.with_field("disposition", Value::from(disposition))
    }

    #[must_use]
    pub fn with_color(self, color: &str) -> Self {
        self.with_field("color", Value::from(color))
    }

    /// Attach an additional pass-through field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// `disposition` when it is a string.
    #[must_use]
    pub fn disposition(&self) -> Option<Disposition> {
        self.text_field("disposition").map(Disposition::from)
    }

    /// `color` when it is a string.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.text_field("color")
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.disposition() == Some(Disposition::Open)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.disposition() == Some(Disposition::Closed)
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// An open record annotated with its primary-color flag.
///
/// Serializes as the record's own fields plus `isPrimary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRecord {
    #[serde(flatten)]
    pub record: Record,
    pub is_primary: bool,
}

impl OpenRecord {
    /// Wrap a record, replacing any `isPrimary` pass-through field.
    #[must_use]
    pub fn new(mut record: Record, is_primary: bool) -> Self {
        record.fields.remove("isPrimary");
        Self { record, is_primary }
    }
}

/// Summary of one logical page of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// Ids of every record on the page, in endpoint order.
    pub ids: Vec<RecordId>,
    /// Records with disposition `open`, in endpoint order.
    pub open: Vec<OpenRecord>,
    /// Number of `closed` records whose color is primary.
    pub closed_primary_count: usize,
    /// Absent on page 1.
    pub previous_page: Option<u32>,
    /// Present only when the endpoint reported a further page.
    pub next_page: Option<u32>,
}

/// Caller input for a retrieval.
///
/// Both fields are optional; defaults are page 1 and no color filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieveOptions {
    pub colors: Option<Vec<String>>,
    pub page: Option<u32>,
}

impl RetrieveOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }
}
