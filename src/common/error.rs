// src/common/error.rs
//! Central error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use super::messages;
use super::response::ApiResponse;
use crate::validation::{ValidationFailure, ValidationFault};

/// Errors surfaced by handlers and services built on this crate.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),

    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Lookup(#[from] ValidationFault),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Aggregated field errors keep the error-list envelope.
            ApiError::Validation(failure) => failure.into_response(),
            ApiError::BadRequest(msg) => {
                ApiResponse::<()>::new(StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Unauthorized(msg) => {
                ApiResponse::<()>::new(StatusCode::UNAUTHORIZED, msg).into_response()
            }
            ApiError::Forbidden(msg) => {
                ApiResponse::<()>::new(StatusCode::FORBIDDEN, msg).into_response()
            }
            ApiError::NotFound(msg) => {
                ApiResponse::<()>::new(StatusCode::NOT_FOUND, msg).into_response()
            }
            // Internal detail is logged, never echoed to the client.
            ApiError::Internal(msg) => {
                error!(detail = %msg, "internal error");
                internal_error_response()
            }
            ApiError::Database(e) => {
                error!(error = %e, "database error");
                internal_error_response()
            }
            ApiError::Lookup(fault) => {
                error!(error = %fault, "validation batch aborted");
                internal_error_response()
            }
        }
    }
}

fn internal_error_response() -> Response {
    ApiResponse::<()>::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        messages::MSG_INTERNAL_ERROR,
    )
    .into_response()
}
