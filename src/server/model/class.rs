//! Domain & parameter models for class operations
//!
//! Defines the class domain model, the class parameter models, and provides
//! methods to convert the class domain model from entity and into DTOs.

use crate::{
    model::class::{ClassDto, CreateClassDto, UpdateClassDto},
    server::{error::AppError, util::parse::from_primary_key},
};

/// The class domain model
///
/// `student_count` is supplied by callers and stored as-is; it is never
/// recomputed from the students referencing the class.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub id: u32,
    pub class_name: String,
    pub student_count: i64,
}

impl Class {
    /// Converts an entity model to the class domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Class)` - The converted class domain model
    /// - `Err(AppError::InternalErr(StoredIdOutOfRange))` - Stored ID is negative
    pub fn from_entity(entity: entity::class::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: from_primary_key(entity.id)?,
            class_name: entity.class_name,
            student_count: entity.student_count,
        })
    }

    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            class_name: self.class_name,
            student_count: self.student_count,
        }
    }
}

/// Parameters for creating a new class
#[derive(Debug, Clone)]
pub struct CreateClassParam {
    pub class_name: String,
    pub student_count: i64,
}

impl From<CreateClassDto> for CreateClassParam {
    fn from(dto: CreateClassDto) -> Self {
        Self {
            class_name: dto.class_name,
            student_count: dto.student_count,
        }
    }
}

/// Parameters for replacing an existing class
///
/// Every field is written; there is no partial update.
#[derive(Debug, Clone)]
pub struct UpdateClassParam {
    pub id: u32,
    pub class_name: String,
    pub student_count: i64,
}

impl UpdateClassParam {
    pub fn from_dto(id: u32, dto: UpdateClassDto) -> Self {
        Self {
            id,
            class_name: dto.class_name,
            student_count: dto.student_count,
        }
    }
}
