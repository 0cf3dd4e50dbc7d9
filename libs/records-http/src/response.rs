use bytes::Bytes;
use http::{Response, StatusCode};
use http_body_util::{BodyExt, Limited};
use hyper::body::Body;

/// Status and fully buffered body of one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl From<Response<Bytes>> for HttpResponse {
    fn from(response: Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status,
            body,
        }
    }
}

/// Buffer a (decompressed) body, failing with
/// [`LengthLimitError`](http_body_util::LengthLimitError) past `limit` bytes.
pub async fn collect_limited<B>(
    response: Response<B>,
    limit: usize,
) -> Result<Response<Bytes>, tower::BoxError>
where
    B: Body<Data = Bytes> + Send,
    B::Error: Into<tower::BoxError>,
{
    let (parts, body) = response.into_parts();
    let body = Limited::new(body, limit).collect().await?.to_bytes();
    Ok(Response::from_parts(parts, body))
}
