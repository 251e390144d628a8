// src/validation/lookup.rs
//! Injected capabilities for validators that consult external systems.
//!
//! Store-backed validators receive a `RecordStore` and the credential
//! validator an `Authenticator` at construction, so batches can run
//! against an in-memory implementation in tests and no validator reaches
//! into ambient global state.

use std::sync::Arc;

use serde_json::Value;

use super::base::ValidationFault;

/// Read-only equality lookup against the backing record store.
pub trait RecordStore: Send + Sync {
    /// Whether at least one record has `attribute_name == value`.
    fn exists(&self, attribute_name: &str, value: &Value) -> Result<bool, ValidationFault>;

    /// The `id` of the first record with `attribute_name == value`, if any.
    fn lookup_id(&self, attribute_name: &str, value: &Value)
        -> Result<Option<Value>, ValidationFault>;
}

/// Credential check used by `AuthPassValidator`. The credentials envelope
/// is whatever shape the backing service expects, typically an object with
/// `username` and `password` keys.
pub trait Authenticator: Send + Sync {
    /// Whether the supplied credentials resolve to a known principal.
    fn authenticate(&self, credentials: &Value) -> Result<bool, ValidationFault>;
}

/// Attribute-indexed store over a list of JSON object records, for tests
/// and small fixed catalogs. The conventional id attribute is `id`.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Vec<Value>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Value>) -> Self {
        Self { records }
    }

    pub fn insert(&mut self, record: Value) {
        self.records.push(record);
    }

    pub fn into_shared(self) -> Arc<dyn RecordStore> {
        Arc::new(self)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn exists(&self, attribute_name: &str, value: &Value) -> Result<bool, ValidationFault> {
        Ok(self
            .records
            .iter()
            .any(|record| record.get(attribute_name) == Some(value)))
    }

    fn lookup_id(
        &self,
        attribute_name: &str,
        value: &Value,
    ) -> Result<Option<Value>, ValidationFault> {
        Ok(self
            .records
            .iter()
            .find(|record| record.get(attribute_name) == Some(value))
            .and_then(|record| record.get("id").cloned()))
    }
}
