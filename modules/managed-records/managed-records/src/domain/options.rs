//! Option normalization: fills in the page and color-filter defaults.

use std::num::NonZeroU32;

use managed_records_sdk::RetrieveOptions;

/// Fully populated retrieval options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub colors: Vec<String>,
    pub page: NonZeroU32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            page: NonZeroU32::MIN,
        }
    }
}

/// Fill in defaults: page 1 and no color filter.
///
/// A page of `0` counts as missing. Larger pages are passed through as-is;
/// the endpoint decides what an out-of-range page means.
#[must_use]
pub fn normalize(options: Option<RetrieveOptions>) -> QueryOptions {
    let Some(options) = options else {
        return QueryOptions::default();
    };

    QueryOptions {
        colors: options.colors.unwrap_or_default(),
        page: options
            .page
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_absent_options() {
        let query = normalize(None);
        assert_eq!(query.page, page(1));
        assert!(query.colors.is_empty());
    }

    #[test]
    fn test_missing_page_defaults_to_first() {
        let query = normalize(Some(RetrieveOptions::new().colors(["red"])));
        assert_eq!(query.page, page(1));
        assert_eq!(query.colors, vec!["red".to_owned()]);
    }

    #[test]
    fn test_missing_colors_defaults_to_empty() {
        let query = normalize(Some(RetrieveOptions::new().page(4)));
        assert_eq!(query.page, page(4));
        assert!(query.colors.is_empty());
    }

    #[test]
    fn test_zero_page_counts_as_missing() {
        assert_eq!(normalize(Some(RetrieveOptions::new().page(0))).page, page(1));
    }

    #[test]
    fn test_large_page_is_not_clamped() {
        assert_eq!(
            normalize(Some(RetrieveOptions::new().page(5_000))).page,
            page(5_000)
        );
    }
}
