// src/middleware/require_keys.rs
//! Middleware that rejects requests missing required keys before the
//! handler runs.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};
use tracing::debug;

use crate::common::messages;
use crate::common::response::ApiResponse;

/// Keys that must be present and non-null in the request.
///
/// ```ignore
/// let app = Router::new()
///     .route("/permissions", post(create_permission))
///     .layer(middleware::from_fn_with_state(
///         RequiredKeys::new(["name", "endpoint_id"]),
///         require_keys,
///     ));
/// ```
#[derive(Clone)]
pub struct RequiredKeys(Arc<Vec<String>>);

impl RequiredKeys {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self(Arc::new(keys.into_iter().map(Into::into).collect()))
    }

    fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Checks required keys against the query string for GET requests and the
/// JSON body for POST/PUT. Other methods are rejected outright. The body
/// is re-materialized for the downstream handler.
pub async fn require_keys(
    State(keys): State<RequiredKeys>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    match *request.method() {
        Method::GET => {
            let query = request.uri().query().unwrap_or("");
            if let Some(missing) = first_missing_query_key(&keys, query) {
                return Err(missing_key_response(&missing));
            }
            Ok(next.run(request).await)
        }
        Method::POST | Method::PUT => {
            let (parts, body) = request.into_parts();
            let bytes = to_bytes(body, usize::MAX)
                .await
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())?;

            let data: Map<String, Value> = serde_json::from_slice(&bytes).unwrap_or_default();
            for key in keys.iter() {
                let value = data.get(key);
                if value.is_none() || value == Some(&Value::Null) {
                    debug!(key = key, "rejecting request with missing key");
                    return Err(missing_key_response(key));
                }
            }

            let request = Request::from_parts(parts, Body::from(bytes));
            Ok(next.run(request).await)
        }
        _ => Err(ApiResponse::<()>::new(
            StatusCode::BAD_REQUEST,
            messages::MSG_INVALID_METHOD,
        )
        .into_response()),
    }
}

/// First required key that is absent or empty in the query string, if any.
fn first_missing_query_key(keys: &RequiredKeys, query: &str) -> Option<String> {
    let mut present: Vec<(String, String)> = Vec::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let mut split = pair.splitn(2, '=');
        let key = split.next().unwrap_or("");
        let value = split.next().unwrap_or("");
        let key = urlencoding::decode(key).map(|k| k.into_owned()).unwrap_or_default();
        let value = urlencoding::decode(value).map(|v| v.into_owned()).unwrap_or_default();
        present.push((key, value));
    }

    keys.iter()
        .find(|key| {
            !present
                .iter()
                .any(|(name, value)| name == key && !value.is_empty())
        })
        .map(str::to_string)
}

fn missing_key_response(key: &str) -> Response {
    ApiResponse::<()>::new(StatusCode::BAD_REQUEST, messages::required_key_message(key))
        .into_response()
}
