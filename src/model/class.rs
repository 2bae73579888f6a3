use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassDto {
    pub id: u32,
    pub class_name: String,
    pub student_count: i64,
}

/// Body of `POST /api/classes`.
///
/// Missing fields take their zero value and an `id` field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateClassDto {
    pub class_name: String,
    pub student_count: i64,
}

/// Body of `PUT /api/classes/{id}`; replaces every field of the class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateClassDto {
    pub class_name: String,
    pub student_count: i64,
}
