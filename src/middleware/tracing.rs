// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Creates per-request spans and reads the propagated x-request-id header

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use tracing::Span;

/// Header carrying the request ID generated by `SetRequestIdLayer`
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Read the request ID, if the request carries one
#[must_use]
pub fn request_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Create a tracing span for an HTTP request
#[must_use]
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request_id_from_headers(request.headers()).unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
