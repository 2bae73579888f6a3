//! SeaORM entity definitions for the school database.

pub mod prelude;

pub mod class;
pub mod student;
