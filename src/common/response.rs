// src/common/response.rs
//! Uniform JSON envelopes for success and error output.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::validation::ValidationError;

/// Standard success envelope: `{status, message, data?, count?}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
            count: None,
        }
    }

    pub fn with_data(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::new(status, message)
        }
    }

    pub fn with_count(status: StatusCode, message: impl Into<String>, data: T, count: u64) -> Self {
        Self {
            data: Some(data),
            count: Some(count),
            ..Self::new(status, message)
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Error-list envelope: `{status, errors}` carrying the structured
/// `(error_code, error_message)` records from a validation batch.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorListResponse {
    pub status: u16,
    pub errors: Vec<ValidationError>,
}

impl ErrorListResponse {
    pub fn new(status: StatusCode, errors: Vec<ValidationError>) -> Self {
        Self {
            status: status.as_u16(),
            errors,
        }
    }
}

impl IntoResponse for ErrorListResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
