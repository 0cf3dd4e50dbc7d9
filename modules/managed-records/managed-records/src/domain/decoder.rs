//! Response decoding: transport response to raw records.

use http::StatusCode;
use managed_records_sdk::Record;

use super::error::DomainError;
use super::transport::TransportResponse;

/// Decode a listing response into records.
///
/// Status 400 means the filter matched nothing and yields an empty list
/// whatever the body holds. Other statuses are parsed like a success, so an
/// error payload that is not a record list surfaces as `Decode`.
///
/// # Errors
///
/// Returns `DomainError::Decode` if the body is not a JSON array of records.
pub fn decode_records(response: &TransportResponse) -> Result<Vec<Record>, DomainError> {
    if response.status == StatusCode::BAD_REQUEST {
        tracing::debug!("records endpoint answered 400; treating as an empty page");
        return Ok(Vec::new());
    }

    if !response.status.is_success() {
        tracing::warn!(status = %response.status, "unexpected status from records endpoint");
    }

    let records: Vec<Record> = serde_json::from_slice(&response.body)?;
    tracing::debug!(count = records.len(), "decoded records");
    Ok(records)
}
