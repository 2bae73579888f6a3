//! Database repository layer for all domain entities.
//!
//! `repository` holds the generic CRUD repository shared by every entity. The
//! entity-specific repositories bind it to one SeaORM entity and return domain
//! models to keep the data layer separate from business logic.

pub mod class;
pub mod repository;
pub mod student;

#[cfg(test)]
mod test;
