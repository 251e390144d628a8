// src/validation/tests/helper_tests.rs

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use crate::validation::base::{FieldValidator, ValidationError, ValidationFault};
    use crate::validation::exceptions::FieldValidationError;
    use crate::validation::helper::{ErrorSet, ValidatorHelper};
    use crate::validation::validators::{
        AlphanumericValidator, DigitsOnlyValidator, EmptyValidator, MinMaxLengthValidator,
    };

    fn data(entries: Value) -> Map<String, Value> {
        entries
            .as_object()
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn test_error_set_deduplicates_by_value() {
        let mut set = ErrorSet::new();
        assert!(set.insert(ValidationError::new("E001", "dup")));
        assert!(!set.insert(ValidationError::new("E001", "dup")));
        assert!(set.insert(ValidationError::new("E001", "different message")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_error_set_preserves_insertion_order() {
        let mut set = ErrorSet::new();
        set.insert(ValidationError::new("E003", "third inserted first"));
        set.insert(ValidationError::new("E001", "then this"));
        set.insert(ValidationError::new("E002", "then that"));

        let codes: Vec<&str> = set.iter().map(|e| e.error_code.as_str()).collect();
        assert_eq!(codes, ["E003", "E001", "E002"]);
    }

    #[test]
    fn test_identical_pairs_from_two_validators_collapse() {
        let mut validators: Vec<Box<dyn FieldValidator>> = vec![
            Box::new(EmptyValidator::new("name", false, "E001", "Name required")),
            Box::new(MinMaxLengthValidator::new(
                "name",
                Some(1),
                None,
                "E001",
                "Name required",
            )),
        ];

        let errors =
            ValidatorHelper::validate_and_collect_errors(&data(json!({"name": ""})), &mut validators)
                .unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(&ValidationError::new("E001", "Name required")));
    }

    #[test]
    fn test_field_validation_error_converts_to_record() {
        let error = FieldValidationError::new("E001", "Name required");
        assert_eq!(error.to_string(), "E001: Name required");

        let record = error.to_record();
        assert_eq!(record, ValidationError::new("E001", "Name required"));

        let mut set = ErrorSet::new();
        assert!(set.insert(record));
        assert!(!set.insert(error.to_record()));
    }

    #[test]
    fn test_convert_empty_set_yields_empty_list() {
        let list = ValidatorHelper::convert_errors_set_to_list(&ErrorSet::new());
        assert!(list.is_empty());
    }

    #[test]
    fn test_convert_set_yields_all_records_in_order() {
        let mut set = ErrorSet::new();
        set.insert(ValidationError::new("E001", "first"));
        set.insert(ValidationError::new("E002", "second"));
        set.insert(ValidationError::new("E003", "third"));

        let list = ValidatorHelper::convert_errors_set_to_list(&set);
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], ValidationError::new("E001", "first"));
        assert_eq!(list[2], ValidationError::new("E003", "third"));

        let serialized = serde_json::to_value(&list).unwrap();
        assert_eq!(
            serialized[1],
            json!({"error_code": "E002", "error_message": "second"})
        );
    }

    #[test]
    fn test_blank_name_scenario() {
        let mut validators: Vec<Box<dyn FieldValidator>> = vec![Box::new(EmptyValidator::new(
            "name",
            false,
            "E001",
            "Name required",
        ))];

        let errors =
            ValidatorHelper::validate_and_collect_errors(&data(json!({"name": ""})), &mut validators)
                .unwrap();
        let list = ValidatorHelper::convert_errors_set_to_list(&errors);
        assert_eq!(list, vec![ValidationError::new("E001", "Name required")]);
    }

    #[test]
    fn test_valid_code_scenario() {
        let mut validators: Vec<Box<dyn FieldValidator>> = vec![Box::new(
            AlphanumericValidator::new("code", "E002", "bad code"),
        )];

        let errors = ValidatorHelper::validate_and_collect_errors(
            &data(json!({"code": "AB12"})),
            &mut validators,
        )
        .unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_key_passes_none_to_validator() {
        // A missing key is not an error by itself; the validator decides.
        let mut validators: Vec<Box<dyn FieldValidator>> = vec![Box::new(EmptyValidator::new(
            "absent",
            false,
            "E001",
            "required",
        ))];

        let errors =
            ValidatorHelper::validate_and_collect_errors(&data(json!({})), &mut validators)
                .unwrap();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_batch_runs_every_validator_and_merges() {
        let mut validators: Vec<Box<dyn FieldValidator>> = vec![
            Box::new(EmptyValidator::new("name", false, "E001", "Name required")),
            Box::new(DigitsOnlyValidator::new("pin", "E004", "digits only")),
        ];

        let errors = ValidatorHelper::validate_and_collect_errors(
            &data(json!({"name": "", "pin": "12a"})),
            &mut validators,
        )
        .unwrap();

        let codes: Vec<&str> = errors.iter().map(|e| e.error_code.as_str()).collect();
        assert_eq!(codes, ["E001", "E004"]);
    }

    #[test]
    fn test_type_mismatch_aborts_batch() {
        // No fault isolation: the first fault aborts, later validators
        // never run.
        let mut validators: Vec<Box<dyn FieldValidator>> = vec![
            Box::new(DigitsOnlyValidator::new("pin", "E004", "digits only")),
            Box::new(EmptyValidator::new("name", false, "E001", "Name required")),
        ];

        let result = ValidatorHelper::validate_and_collect_errors(
            &data(json!({"pin": 1234, "name": ""})),
            &mut validators,
        );
        assert!(matches!(result, Err(ValidationFault::TypeMismatch { .. })));
        assert!(validators[1].errors().is_empty());
    }

    #[test]
    fn test_contradictory_bounds_deduplicate_in_set() {
        let mut validators: Vec<Box<dyn FieldValidator>> = vec![Box::new(
            MinMaxLengthValidator::new("name", Some(5), Some(2), "E010", "bad length"),
        )];

        let errors = ValidatorHelper::validate_and_collect_errors(
            &data(json!({"name": "abc"})),
            &mut validators,
        )
        .unwrap();
        assert_eq!(errors.len(), 1);
    }
}
