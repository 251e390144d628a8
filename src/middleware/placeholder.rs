// src/middleware/placeholder.rs
//! Replaces a human-friendly placeholder in a payload with the id of the
//! record it names.

use serde_json::{Map, Value};
use tracing::debug;

use crate::validation::{RecordStore, ValidationFault};

/// Looks up a record by `attribute == data[placeholder_key]` and writes
/// the found id under `id_key`. Returns whether a replacement happened;
/// missing placeholders and unmatched lookups leave the payload untouched.
pub fn replace_placeholder_with_id(
    data: &mut Map<String, Value>,
    store: &dyn RecordStore,
    attribute: &str,
    placeholder_key: &str,
    id_key: &str,
) -> Result<bool, ValidationFault> {
    let Some(placeholder_value) = data.get(placeholder_key).cloned() else {
        return Ok(false);
    };
    if placeholder_value.is_null() {
        return Ok(false);
    }

    match store.lookup_id(attribute, &placeholder_value)? {
        Some(id) => {
            debug!(
                attribute = attribute,
                placeholder_key = placeholder_key,
                "resolved placeholder to record id"
            );
            data.insert(id_key.to_string(), id);
            Ok(true)
        }
        None => Ok(false),
    }
}
