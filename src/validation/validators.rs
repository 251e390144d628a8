// src/validation/validators.rs
//! Built-in field validators. One predicate per validator, parameterized
//! by error code and message so the same predicate can carry different
//! user-facing text.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::base::{
    as_str, is_blank, value_len, ErrorSink, FieldValidator, ValidationError, ValidationFault,
};
use super::lookup::{Authenticator, RecordStore};

static ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid pattern"));
static WORD_WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s]+$").expect("valid pattern"));
static DIGITS_ONLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid pattern"));
static MOBILE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{1,3}\s?\(\d{1,4}\)\s?\d{6,}$").expect("valid pattern"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.%+-]+@[\w.-]+\.[a-zA-Z]{2,4}$").expect("valid pattern"));
static ALLOWED_SPECIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s.,]+$").expect("valid pattern"));

/// Checks that the element count of a value stays within optional bounds.
///
/// Both bounds are checked independently, so a single run can record the
/// same `(code, message)` pair twice; the aggregation helper deduplicates.
pub struct MinMaxLengthValidator {
    field_name: String,
    min_length: Option<usize>,
    max_length: Option<usize>,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl MinMaxLengthValidator {
    pub fn new(
        field_name: impl Into<String>,
        min_length: Option<usize>,
        max_length: Option<usize>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            min_length,
            max_length,
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for MinMaxLengthValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        let len = value_len(&self.field_name, value)?;
        if self.min_length.is_some_and(|min| len < min) {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        if self.max_length.is_some_and(|max| len > max) {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Rejects blank values unless `allow_blank` is set. Blank covers the
/// scripting-style falsy cases: missing, null, empty string, zero, false,
/// empty array or object.
pub struct EmptyValidator {
    field_name: String,
    allow_blank: bool,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl EmptyValidator {
    pub fn new(
        field_name: impl Into<String>,
        allow_blank: bool,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            allow_blank,
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for EmptyValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        if !self.allow_blank && is_blank(value) {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Whole-string `[A-Za-z0-9]+` match; an empty string fails.
pub struct AlphanumericValidator {
    field_name: String,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl AlphanumericValidator {
    pub fn new(
        field_name: impl Into<String>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for AlphanumericValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        let text = as_str(&self.field_name, value)?;
        if !ALPHANUMERIC_RE.is_match(text) {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Whole-string word characters and whitespace.
pub struct AlphanumericWithWhitespaceValidator {
    field_name: String,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl AlphanumericWithWhitespaceValidator {
    pub fn new(
        field_name: impl Into<String>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for AlphanumericWithWhitespaceValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        let text = as_str(&self.field_name, value)?;
        if !WORD_WHITESPACE_RE.is_match(text) {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Whole-string digits.
pub struct DigitsOnlyValidator {
    field_name: String,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl DigitsOnlyValidator {
    pub fn new(
        field_name: impl Into<String>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for DigitsOnlyValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        let text = as_str(&self.field_name, value)?;
        if !DIGITS_ONLY_RE.is_match(text) {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Fixed predicate selected by `PatternValidator`. A tagged variant rather
/// than a method name resolved at runtime, so an unknown selector cannot
/// exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `+<country> (<area>) <number>` with at least six trailing digits.
    MobileNumber,
    Email,
    /// Word characters, whitespace, `.` and `,`.
    AllowedSpecialChars,
    DigitsOnly,
}

impl PatternKind {
    fn regex(self) -> &'static Regex {
        match self {
            PatternKind::MobileNumber => &MOBILE_NUMBER_RE,
            PatternKind::Email => &EMAIL_RE,
            PatternKind::AllowedSpecialChars => &ALLOWED_SPECIAL_RE,
            PatternKind::DigitsOnly => &DIGITS_ONLY_RE,
        }
    }
}

/// Applies one of the fixed `PatternKind` predicates to a string field.
pub struct PatternValidator {
    field_name: String,
    kind: PatternKind,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl PatternValidator {
    pub fn new(
        field_name: impl Into<String>,
        kind: PatternKind,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            kind,
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for PatternValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        let text = as_str(&self.field_name, value)?;
        if !self.kind.regex().is_match(text) {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Flags a value that already exists in the record store. Used to reject
/// duplicates, e.g. an email that is already registered.
pub struct AttributeExistsValidator {
    field_name: String,
    attribute_name: String,
    store: Arc<dyn RecordStore>,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl AttributeExistsValidator {
    pub fn new(
        field_name: impl Into<String>,
        attribute_name: impl Into<String>,
        store: Arc<dyn RecordStore>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            attribute_name: attribute_name.into(),
            store,
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for AttributeExistsValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        let value = value.unwrap_or(&Value::Null);
        if self.store.exists(&self.attribute_name, value)? {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Flags a value with no matching record in the store. Used to enforce
/// that a referenced value exists.
pub struct AttributeNotExistsValidator {
    field_name: String,
    attribute_name: String,
    store: Arc<dyn RecordStore>,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl AttributeNotExistsValidator {
    pub fn new(
        field_name: impl Into<String>,
        attribute_name: impl Into<String>,
        store: Arc<dyn RecordStore>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            attribute_name: attribute_name.into(),
            store,
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for AttributeNotExistsValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        let value = value.unwrap_or(&Value::Null);
        if !self.store.exists(&self.attribute_name, value)? {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Looks up a related record by `lookup_field_alias == value` and records
/// an error when a match is found. Blank values are skipped.
///
/// TODO: confirm with the API owners whether the failure case should be a
/// missing related record instead; current consumers depend on the
/// match-found behavior, so it is preserved as-is.
pub struct RelatedFieldValidator {
    field_name: String,
    lookup_field_alias: String,
    store: Arc<dyn RecordStore>,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl RelatedFieldValidator {
    pub fn new(
        field_name: impl Into<String>,
        lookup_field_alias: impl Into<String>,
        store: Arc<dyn RecordStore>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            lookup_field_alias: lookup_field_alias.into(),
            store,
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for RelatedFieldValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        if is_blank(value) {
            return Ok(());
        }
        let value = value.unwrap_or(&Value::Null);
        if self.store.exists(&self.lookup_field_alias, value)? {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}

/// Passes the field value, treated as a credentials envelope, to the
/// injected authenticator and records an error when the check fails.
pub struct AuthPassValidator {
    field_name: String,
    authenticator: Arc<dyn Authenticator>,
    error_code: String,
    error_message: String,
    sink: ErrorSink,
}

impl AuthPassValidator {
    pub fn new(
        field_name: impl Into<String>,
        authenticator: Arc<dyn Authenticator>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            authenticator,
            error_code: error_code.into(),
            error_message: error_message.into(),
            sink: ErrorSink::default(),
        }
    }
}

impl FieldValidator for AuthPassValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&mut self, value: Option<&Value>) -> Result<(), ValidationFault> {
        let credentials = value.unwrap_or(&Value::Null);
        if !self.authenticator.authenticate(credentials)? {
            self.sink.add_error(&self.error_code, &self.error_message);
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.sink.errors()
    }
}
