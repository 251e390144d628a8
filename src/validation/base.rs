// src/validation/base.rs
//! Core contract shared by all field validators: the structured error
//! record, the per-validator error sink, and the `FieldValidator` trait.

use serde::Serialize;
use serde_json::Value;

/// One structured validation failure.
///
/// Immutable once constructed. Equality is by value; the aggregation
/// helper relies on it for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, utoipa::ToSchema)]
pub struct ValidationError {
    pub error_code: String,
    pub error_message: String,
}

impl ValidationError {
    pub fn new(error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_message: error_message.into(),
        }
    }
}

/// Fatal faults that abort a validation batch. Ordinary invalid input is
/// never reported this way; it is recorded as `ValidationError` entries.
#[derive(Debug, thiserror::Error)]
pub enum ValidationFault {
    #[error("record store lookup failed: {0}")]
    Store(String),

    #[error("authentication backend failed: {0}")]
    Auth(String),

    #[error("field '{field}' expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Accumulates errors for a single validator instance.
///
/// Validators are single-use: nothing clears the list between `validate`
/// calls, so a reused instance would carry errors from earlier runs.
#[derive(Debug, Default)]
pub struct ErrorSink {
    errors: Vec<ValidationError>,
}

impl ErrorSink {
    pub fn add_error(&mut self, error_code: &str, error_message: &str) {
        self.errors.push(ValidationError::new(error_code, error_message));
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Contract shared by every field validator.
///
/// A validator checks one predicate on one named field and records
/// failures through its sink. It only ever appends to its own error list;
/// it never mutates the input mapping or any other validator's state.
/// `Err` is reserved for external dependency faults and type mismatches.
pub trait FieldValidator: Send {
    /// Key into the data mapping under validation.
    fn field_name(&self) -> &str;

    /// Checks `value` and records zero or more errors.
    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault>;

    /// Errors accumulated by this instance so far.
    fn errors(&self) -> &[ValidationError];
}

/// Scripting-style falsiness: missing, null, empty string, zero, false,
/// empty array or object.
pub(crate) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

pub(crate) fn as_str<'a>(
    field_name: &str,
    value: Option<&'a Value>,
) -> Result<&'a str, ValidationFault> {
    match value {
        Some(Value::String(s)) => Ok(s),
        other => Err(ValidationFault::TypeMismatch {
            field: field_name.to_string(),
            expected: "string",
            found: type_name(other),
        }),
    }
}

/// Element count for strings (characters), arrays, and objects.
pub(crate) fn value_len(field_name: &str, value: Option<&Value>) -> Result<usize, ValidationFault> {
    match value {
        Some(Value::String(s)) => Ok(s.chars().count()),
        Some(Value::Array(a)) => Ok(a.len()),
        Some(Value::Object(o)) => Ok(o.len()),
        other => Err(ValidationFault::TypeMismatch {
            field: field_name.to_string(),
            expected: "string, array, or object",
            found: type_name(other),
        }),
    }
}

fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
