// src/validation/mod.rs
//! Field validation pipeline.
//!
//! Callers build a batch of validators bound to field names, run the batch
//! against a JSON data mapping through `ValidatorHelper`, and surface the
//! deduplicated error list as a `ValidationFailure`. Validators never fail
//! the batch for ordinary invalid input; only external lookup faults and
//! type mismatches abort it.

pub mod base;
pub mod exceptions;
pub mod helper;
pub mod lookup;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use base::{ErrorSink, FieldValidator, ValidationError, ValidationFault};
pub use exceptions::{FieldValidationError, ValidationFailure};
pub use helper::{ErrorSet, ValidatorHelper};
pub use lookup::{Authenticator, InMemoryRecordStore, RecordStore};
pub use validators::{
    AlphanumericValidator, AlphanumericWithWhitespaceValidator, AttributeExistsValidator,
    AttributeNotExistsValidator, AuthPassValidator, DigitsOnlyValidator, EmptyValidator,
    MinMaxLengthValidator, PatternKind, PatternValidator, RelatedFieldValidator,
};
