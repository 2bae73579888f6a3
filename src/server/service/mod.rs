//! Business logic layer between controllers and repositories.
//!
//! Services currently pass every call through to their repository and turn
//! missing rows into `AppError::NotFound`.

pub mod class;
pub mod student;
