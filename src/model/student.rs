use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: u32,
    pub student_name: String,
    pub class_id: i64,
    /// Empty when the student has no section.
    pub student_section: String,
}

/// Body of `POST /api/students`.
///
/// Missing fields take their zero value and an `id` field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateStudentDto {
    pub student_name: String,
    pub class_id: i64,
    pub student_section: String,
}

/// Body of `PUT /api/students/{id}`; replaces every field of the student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateStudentDto {
    pub student_name: String,
    pub class_id: i64,
    pub student_section: String,
}
