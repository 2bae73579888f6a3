//! Data transfer objects exchanged with API clients.

pub mod class;
pub mod student;
