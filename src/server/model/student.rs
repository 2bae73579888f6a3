//! Domain & parameter models for student operations
//!
//! Defines the student domain model, the student parameter models, and provides
//! methods to convert the student domain model from entity and into DTOs.

use crate::{
    model::student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    server::{error::AppError, util::parse::from_primary_key},
};

/// The student domain model
///
/// `class_id` is an unchecked reference; it may name a class that does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: u32,
    pub student_name: String,
    pub class_id: i64,
    pub student_section: Option<String>,
}

impl Student {
    /// Converts an entity model to the student domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Student)` - The converted student domain model
    /// - `Err(AppError::InternalErr(StoredIdOutOfRange))` - Stored ID is negative
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: from_primary_key(entity.id)?,
            student_name: entity.student_name,
            class_id: entity.class_id,
            student_section: entity.student_section,
        })
    }

    /// Converts into the response DTO; a missing section is sent as an empty string.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            student_name: self.student_name,
            class_id: self.class_id,
            student_section: self.student_section.unwrap_or_default(),
        }
    }
}

/// Parameters for creating a new student
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub student_name: String,
    pub class_id: i64,
    pub student_section: Option<String>,
}

impl From<CreateStudentDto> for CreateStudentParam {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            student_name: dto.student_name,
            class_id: dto.class_id,
            student_section: section_from_dto(dto.student_section),
        }
    }
}

/// Parameters for replacing an existing student
#[derive(Debug, Clone)]
pub struct UpdateStudentParam {
    pub id: u32,
    pub student_name: String,
    pub class_id: i64,
    pub student_section: Option<String>,
}

impl UpdateStudentParam {
    pub fn from_dto(id: u32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            student_name: dto.student_name,
            class_id: dto.class_id,
            student_section: section_from_dto(dto.student_section),
        }
    }
}

/// An empty section label is stored as NULL.
fn section_from_dto(section: String) -> Option<String> {
    if section.is_empty() {
        None
    } else {
        Some(section)
    }
}
