// src/common/mod.rs - shared envelopes, errors, and utilities

pub mod error;
pub mod helpers;
pub mod messages;
pub mod pagination;
pub mod response;


// Re-export commonly used types for convenience
pub use error::ApiError;
pub use pagination::{paginate_slice, PageInfo, PageQuery, Paginated};
pub use response::{ApiResponse, ErrorListResponse};
