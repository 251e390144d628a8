// src/validation/exceptions.rs
//! Failure carriers that move structured validation output across layers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::base::ValidationError;
use super::helper::{ErrorSet, ValidatorHelper};
use crate::common::response::ErrorListResponse;

/// A single field failure, convertible to the response-ready record.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{error_code}: {error_message}")]
pub struct FieldValidationError {
    pub error_code: String,
    pub error_message: String,
}

impl FieldValidationError {
    pub fn new(error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_message: error_message.into(),
        }
    }

    pub fn to_record(&self) -> ValidationError {
        ValidationError::new(&self.error_code, &self.error_message)
    }
}

/// Whole-batch failure surfaced to the HTTP layer once aggregation is
/// done.
#[derive(Debug, Clone, thiserror::Error)]
#[error("validation failed with {} error(s)", errors.len())]
pub struct ValidationFailure {
    pub errors: Vec<ValidationError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn from_set(errors_set: &ErrorSet) -> Self {
        Self {
            errors: ValidatorHelper::convert_errors_set_to_list(errors_set),
        }
    }
}

impl IntoResponse for ValidationFailure {
    fn into_response(self) -> Response {
        // Field validation output travels as a 200 with the error-list
        // envelope; transport-level statuses are reserved for faults.
        ErrorListResponse::new(StatusCode::OK, self.errors).into_response()
    }
}
