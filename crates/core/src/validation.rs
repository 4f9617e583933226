//! Boundary validation helpers.
//!
//! Required-field checks run before any persistence access, so a request
//! with a blank name or a missing id never reaches the database.

use crate::error::CoreError;
use crate::types::DbId;

/// Require a non-blank string field.
///
/// Returns the trimmed value, or `Validation("<field> is required")` when
/// the input is empty or whitespace-only.
pub fn require_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Normalize an optional text field: blank strings become `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Require a positive id field.
pub fn require_id(field: &str, value: DbId) -> Result<DbId, CoreError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(CoreError::Validation(format!("{field} is required")))
    }
}
