//! HTTP request handlers.
//!
//! Controllers decode requests into parameter models, call the matching service,
//! and convert the resulting domain models into DTOs.

pub mod class;
pub mod student;

use axum::extract::{rejection::PathRejection, Path};

use crate::server::{
    error::{from_path_rejection, invalid_id, AppError},
    util::parse::parse_id,
};

/// Extracts a resource ID from the path.
///
/// # Returns
/// - `Ok(u32)` - The ID as plain decimal digits
/// - `Err(AppError::BadRequest)` - "Invalid {resource} ID"
fn path_id(path: Result<Path<String>, PathRejection>, resource: &str) -> Result<u32, AppError> {
    let Path(raw) = path.map_err(|rejection| from_path_rejection(resource, rejection))?;

    parse_id(&raw).ok_or_else(|| invalid_id(resource))
}

#[cfg(test)]
mod test;
