// src/middleware/request_logging.rs
//! Debug-level logging of request bodies and response statuses.

use std::time::Instant;

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

/// Logs the request method, URI, and JSON body at debug level, then the
/// response status and elapsed time. The body is buffered and handed back
/// to the handler unchanged.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if !bytes.is_empty() {
        match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(json) => debug!(
                method = %parts.method,
                uri = %parts.uri,
                body = %json,
                "request"
            ),
            Err(_) => debug!(
                method = %parts.method,
                uri = %parts.uri,
                body_bytes = bytes.len(),
                "request (non-JSON body)"
            ),
        }
    } else {
        debug!(method = %parts.method, uri = %parts.uri, "request");
    }

    let method = parts.method.clone();
    let uri = parts.uri.clone();
    let request = Request::from_parts(parts, Body::from(bytes));

    let started = Instant::now();
    let response = next.run(request).await;

    debug!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "response"
    );

    Ok(response)
}
