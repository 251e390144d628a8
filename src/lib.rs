// src/lib.rs
//! Shared building blocks for axum + sqlx REST services: field
//! validation with structured error records, uniform response envelopes,
//! pagination, generic CRUD orchestration, request pre-processing
//! middleware, and OpenAPI wiring.

pub mod common;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod service;
pub mod validation;

// Re-export the types most callers need
pub use common::{ApiError, ApiResponse, ErrorListResponse, PageQuery, Paginated};
pub use service::{BaseService, CrudStore, Record};
pub use validation::{
    FieldValidator, ValidationError, ValidationFailure, ValidatorHelper,
};
