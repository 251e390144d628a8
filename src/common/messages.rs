// src/common/messages.rs
//! User-facing and log message catalogs shared across services.

pub const MSG_OK: &str = "Ok";
pub const MSG_NO_CONTENT: &str = "No data found.";
pub const MSG_UNAUTHORIZED: &str =
    "You are not authorized to access this resource. Admin access required.";
pub const MSG_FORBIDDEN: &str = "You are not allowed to perform this action.";
pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";
pub const MSG_INVALID_METHOD: &str = "Invalid request method";

pub fn created(resource: &str) -> String {
    format!("{} created successfully.", resource)
}

pub fn retrieved(resource: &str) -> String {
    format!("{} retrieved successfully.", resource)
}

pub fn updated(resource: &str) -> String {
    format!("{} updated successfully.", resource)
}

pub fn deleted(resource: &str) -> String {
    format!("{} deleted successfully.", resource)
}

pub fn update_failed(resource: &str) -> String {
    format!("Unable to update {}.", resource)
}

pub fn delete_failed(resource: &str) -> String {
    format!("Unable to delete {}.", resource)
}

pub fn not_found(resource: &str, id: &str) -> String {
    format!("{} Not found with id {}", resource, id)
}

pub fn object_not_exists_message(object_name: &str, object_id: &str) -> String {
    format!("No {} exists with ID {}", object_name, object_id)
}

pub fn required_key_message(key: &str) -> String {
    format!("'{}' is required and cannot be None.", key)
}
