use crate::server::error::{internal::InternalError, AppError};

/// Parses an ID path segment
///
/// Only plain decimal digits are accepted, so signs, whitespace and empty
/// segments are rejected along with values above `u32::MAX`.
///
/// # Returns
/// - `Some(u32)` - The parsed ID
/// - `None` - The segment is not a valid ID
pub fn parse_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    raw.parse().ok()
}

/// Converts an API ID into a storage primary key
///
/// IDs above the storage range can never have been assigned, so callers treat
/// `None` the same as a missing row.
///
/// # Arguments
/// - `id` - The ID received from the client
///
/// # Returns
/// - `Some(i32)` - The primary key to query with
/// - `None` - The ID cannot exist in storage
pub fn to_primary_key(id: u32) -> Option<i32> {
    i32::try_from(id).ok()
}

/// Converts a stored primary key into an API ID
///
/// # Arguments
/// - `value` - The primary key read from the database
///
/// # Returns
/// - `Ok(u32)` - Successfully converted key
/// - `Err(AppError::InternalErr(StoredIdOutOfRange))` - The key is negative
pub fn from_primary_key(value: i32) -> Result<u32, AppError> {
    let result = u32::try_from(value)
        .map_err(|source| InternalError::StoredIdOutOfRange { value, source })?;

    Ok(result)
}
