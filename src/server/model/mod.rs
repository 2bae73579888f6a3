//! Domain models and operation-specific parameter types.
//!
//! Repositories return these domain models instead of SeaORM entity models, and
//! controllers convert them into DTOs before responding.

pub mod class;
pub mod student;
