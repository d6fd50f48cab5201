//! Standard error messages for consistent error responses.

pub const VALIDATION_FAILED: &str = "Validation failed for the provided input.";
pub const INVALID_ID: &str = "Invalid integer id in path.";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found.";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred.";
pub const DB_ERROR: &str = "A database error occurred.";
