use uuid::Uuid;

use crate::server::error::AppError;

/// Validates that `value` is a UUID and returns it in canonical hyphenated lowercase form.
///
/// # Arguments
/// - `field` - Name of the field being parsed, used in the error message
/// - `value` - The string to validate
///
/// # Returns
/// - `Ok(String)` - Canonical UUID string
/// - `Err(AppError::BadRequest)` - `value` is not a UUID
pub fn parse_uuid(field: &str, value: &str) -> Result<String, AppError> {
    let uuid = Uuid::parse_str(value)
        .map_err(|_| AppError::BadRequest(format!("Invalid UUID value for {}", field)))?;

    Ok(uuid.hyphenated().to_string())
}
