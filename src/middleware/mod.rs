// src/middleware/mod.rs
//! Request pre-processing: required-key checks, placeholder resolution,
//! and request/response logging.

pub mod placeholder;
pub mod request_logging;
pub mod require_keys;


pub use placeholder::replace_placeholder_with_id;
pub use request_logging::log_request_response;
pub use require_keys::{require_keys, RequiredKeys};
