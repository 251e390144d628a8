// src/validation/helper.rs
//! Batch orchestration: run a list of validators against one data mapping
//! and collect a deduplicated error set.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::base::{FieldValidator, ValidationError, ValidationFault};

/// Deduplicated collection of validation errors, keyed by the whole
/// `(error_code, error_message)` pair. Iteration follows insertion order,
/// so converting the set to a list is deterministic.
#[derive(Debug, Default)]
pub struct ErrorSet {
    seen: HashSet<ValidationError>,
    ordered: Vec<ValidationError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the error unless an equal one is already present. Returns
    /// whether the set changed.
    pub fn insert(&mut self, error: ValidationError) -> bool {
        if self.seen.insert(error.clone()) {
            self.ordered.push(error);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.seen.contains(error)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.ordered.iter()
    }
}

/// Runs validator batches and normalizes their output.
pub struct ValidatorHelper;

impl ValidatorHelper {
    /// Runs each validator in order against `data[validator.field_name()]`
    /// (a missing key yields `None`, which is not an error by itself) and
    /// merges the accumulated errors into one deduplicated set.
    ///
    /// There is no fault isolation between validators: the first external
    /// lookup fault or type mismatch aborts the whole batch.
    pub fn validate_and_collect_errors(
        data: &Map<String, Value>,
        validators: &mut [Box<dyn FieldValidator>],
    ) -> Result<ErrorSet, ValidationFault> {
        let mut errors_set = ErrorSet::new();

        for validator in validators.iter_mut() {
            let value = data.get(validator.field_name());
            validator.validate(value)?;
            for error in validator.errors() {
                errors_set.insert(error.clone());
            }
        }

        Ok(errors_set)
    }

    /// Materializes the set as a serialization-ready list, in insertion
    /// order.
    pub fn convert_errors_set_to_list(errors_set: &ErrorSet) -> Vec<ValidationError> {
        errors_set.iter().cloned().collect()
    }
}
