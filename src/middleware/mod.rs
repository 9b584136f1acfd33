// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Provides CORS setup, request ID propagation, and per-request spans

/// CORS configuration
pub mod cors;
/// Request tracing and request ID helpers
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, request_id_from_headers, REQUEST_ID_HEADER};
