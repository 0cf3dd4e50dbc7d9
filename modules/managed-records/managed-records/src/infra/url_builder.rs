//! Request URL construction for the listing endpoint.

use url::Url;

use crate::domain::query::EndpointParams;

pub const LIMIT_PARAM: &str = "limit";
pub const OFFSET_PARAM: &str = "offset";
/// Array-style key; one pair is appended per color.
pub const COLOR_PARAM: &str = "color[]";

/// Append the endpoint parameters to `base`, keeping any query it already has.
#[must_use]
pub fn build_request_url(base: &Url, params: &EndpointParams) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair(LIMIT_PARAM, &params.limit.to_string())
            .append_pair(OFFSET_PARAM, &params.offset.to_string());
        for color in &params.color_filter {
            pairs.append_pair(COLOR_PARAM, color);
        }
    }
    url
}
