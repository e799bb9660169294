use std::{convert::Infallible, fmt};

use axum::{async_trait, extract::FromRequestParts};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id assigned to the request by the routing layer.
///
/// Empty when no id was assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestId {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        Ok(Self::from(id))
    }
}

/// Assigns a UUID to requests that arrive without an `x-request-id`.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn extract(request: http::Request<()>) -> RequestId {
        let (mut parts, _) = request.into_parts();
        RequestId::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn reads_header() {
        let request = http::Request::builder()
            .header(REQUEST_ID_HEADER, "host/abc-000001")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await.as_str(), "host/abc-000001");
    }

    #[tokio::test]
    async fn missing_header_is_empty() {
        let request = http::Request::builder().body(()).unwrap();

        assert_eq!(extract(request).await, RequestId::default());
    }
}
