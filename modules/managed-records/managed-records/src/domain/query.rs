//! Query translation: page number and color filter to endpoint parameters.

use super::options::QueryOptions;

/// Records per logical page.
pub const PAGE_SIZE: usize = 10;

/// Records requested per fetch: one page plus a sentinel that signals a
/// further page.
pub const FETCH_LIMIT: usize = PAGE_SIZE + 1;

/// Query parameters sent to the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointParams {
    pub limit: usize,
    pub offset: u64,
    /// Sent as a repeated `color[]` parameter; empty means no filtering.
    pub color_filter: Vec<String>,
}

/// Translate normalized options into endpoint parameters.
#[must_use]
pub fn translate(options: &QueryOptions) -> EndpointParams {
    EndpointParams {
        limit: FETCH_LIMIT,
        offset: page_offset(options.page.get()),
        color_filter: options.colors.clone(),
    }
}

/// Offset of the first record on `page` (1-based).
fn page_offset(page: u32) -> u64 {
    (u64::from(page) - 1) * PAGE_SIZE as u64
}
