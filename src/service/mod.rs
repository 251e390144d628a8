// src/service/mod.rs
//! Generic CRUD orchestration over an object-level persistence seam.
//!
//! `CrudStore` is the narrow async interface a resource's storage has to
//! implement; `BaseService` layers the shared behavior on top: validation
//! before writes, soft-delete filtering, catalog messages, and structured
//! logs.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::common::error::ApiError;
use crate::common::messages;
use crate::validation::{FieldValidator, ValidationFailure, ValidatorHelper};


/// A stored row as a JSON object keyed by column name.
pub type Record = Map<String, Value>;

/// Object-level persistence operations for one resource.
#[async_trait]
pub trait CrudStore: Send + Sync {
    /// Human-readable resource name used in messages and logs.
    fn resource_name(&self) -> &str;

    /// First record matching every filter, if any.
    async fn get(&self, filters: &Record) -> Result<Option<Record>, ApiError>;

    /// All records matching every filter, optionally ordered by a column.
    async fn get_all(
        &self,
        filters: &Record,
        ordering: Option<&str>,
    ) -> Result<Vec<Record>, ApiError>;

    /// Inserts a record and returns it as stored.
    async fn insert(&self, data: Record) -> Result<Record, ApiError>;

    /// Applies `data` to the record with the given id and returns the
    /// updated record. With `partial`, absent fields keep their values.
    async fn update(&self, id: &str, data: Record, partial: bool) -> Result<Record, ApiError>;

    /// Removes the record permanently.
    async fn delete_permanently(&self, id: &str) -> Result<(), ApiError>;
}

/// Shared CRUD behavior over any `CrudStore`.
pub struct BaseService<S: CrudStore> {
    store: S,
}

impl<S: CrudStore> BaseService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// First record matching the supplied filters.
    pub async fn get_object(&self, filters: &Record) -> Result<Option<Record>, ApiError> {
        self.store.get(filters).await
    }

    /// Record by id. Soft-deleted records are hidden unless
    /// `include_deleted` is set.
    pub async fn get_object_by_id(
        &self,
        id: &str,
        include_deleted: bool,
    ) -> Result<Option<Record>, ApiError> {
        debug!(resource = self.store.resource_name(), id = %id, "getting record");
        let mut filters = Record::new();
        filters.insert("id".to_string(), Value::String(id.to_string()));
        if !include_deleted {
            filters.insert("is_deleted".to_string(), Value::Bool(false));
        }
        self.store.get(&filters).await
    }

    /// All records matching `filters`, excluding soft-deleted rows unless
    /// the caller filters on `is_deleted` explicitly.
    pub async fn get_all(
        &self,
        mut filters: Record,
        ordering: Option<&str>,
    ) -> Result<Vec<Record>, ApiError> {
        filters
            .entry("is_deleted".to_string())
            .or_insert(Value::Bool(false));
        debug!(resource = self.store.resource_name(), "listing records");
        self.store.get_all(&filters, ordering).await
    }

    /// All records matching `filters` with no implicit soft-delete
    /// filter, so soft-deleted rows are included unless the caller
    /// excludes them.
    pub async fn list_all(
        &self,
        filters: Record,
        ordering: Option<&str>,
    ) -> Result<Vec<Record>, ApiError> {
        debug!(resource = self.store.resource_name(), "listing all records");
        self.store.get_all(&filters, ordering).await
    }

    /// Runs the validator batch against `data`, then inserts it. A
    /// non-empty error set aborts with `ApiError::Validation`.
    pub async fn create(
        &self,
        data: Record,
        validators: &mut [Box<dyn FieldValidator>],
    ) -> Result<Record, ApiError> {
        let errors = ValidatorHelper::validate_and_collect_errors(&data, validators)?;
        if !errors.is_empty() {
            warn!(
                resource = self.store.resource_name(),
                errors = errors.len(),
                "create rejected by validation"
            );
            return Err(ValidationFailure::from_set(&errors).into());
        }

        info!(resource = self.store.resource_name(), "creating record");
        let record = self.store.insert(data).await?;
        info!(resource = self.store.resource_name(), "record created");
        Ok(record)
    }

    /// Validates and applies `data` to an existing record. Missing records
    /// map to `ApiError::NotFound` with the catalog message.
    pub async fn update(
        &self,
        id: &str,
        data: Record,
        validators: &mut [Box<dyn FieldValidator>],
        partial: bool,
    ) -> Result<Record, ApiError> {
        let errors = ValidatorHelper::validate_and_collect_errors(&data, validators)?;
        if !errors.is_empty() {
            warn!(
                resource = self.store.resource_name(),
                id = %id,
                errors = errors.len(),
                "update rejected by validation"
            );
            return Err(ValidationFailure::from_set(&errors).into());
        }

        self.require_exists(id).await?;
        info!(resource = self.store.resource_name(), id = %id, partial = partial, "updating record");
        let record = self.store.update(id, data, partial).await?;
        info!(resource = self.store.resource_name(), id = %id, "record updated");
        Ok(record)
    }

    /// Soft-deletes the record by setting `is_deleted`.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.require_exists(id).await?;
        info!(resource = self.store.resource_name(), id = %id, "soft-deleting record");
        let mut data = Record::new();
        data.insert("is_deleted".to_string(), Value::Bool(true));
        self.store.update(id, data, true).await?;
        Ok(())
    }

    /// Clears the record's `is_active` flag.
    pub async fn deactivate(&self, id: &str) -> Result<(), ApiError> {
        self.require_exists(id).await?;
        info!(resource = self.store.resource_name(), id = %id, "deactivating record");
        let mut data = Record::new();
        data.insert("is_active".to_string(), Value::Bool(false));
        self.store.update(id, data, true).await?;
        Ok(())
    }

    /// Removes the record permanently.
    pub async fn delete_permanently(&self, id: &str) -> Result<(), ApiError> {
        self.require_exists(id).await?;
        info!(resource = self.store.resource_name(), id = %id, "deleting record permanently");
        self.store.delete_permanently(id).await
    }

    async fn require_exists(&self, id: &str) -> Result<(), ApiError> {
        if self.get_object_by_id(id, true).await?.is_none() {
            return Err(ApiError::NotFound(messages::object_not_exists_message(
                self.store.resource_name(),
                id,
            )));
        }
        Ok(())
    }
}
