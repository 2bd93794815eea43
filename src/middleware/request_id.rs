//! Correlation ids and the per-request access log.

use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse the caller's `X-Request-ID` or mint a UUIDv4, echo it on the response,
/// and emit one `http_request` log line per request.
pub async fn request_context(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!("http_request", %method, %path, request_id = %request_id);
    let started = Instant::now();

    let mut response = next.run(req).instrument(span.clone()).await;

    match HeaderValue::from_str(&request_id) {
        Ok(value) => {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Request id is not a valid header value");
        }
    }

    span.in_scope(|| {
        tracing::info!(
            event = "http_request",
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );
    });

    response
}
