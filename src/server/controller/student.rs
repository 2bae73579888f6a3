use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::path_id;
use crate::{
    model::student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    server::{
        error::AppError,
        model::student::{CreateStudentParam, UpdateStudentParam},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "students";

/// Create a new student.
///
/// The referenced class is stored as given without checking that it exists.
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid request body", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<Option<CreateStudentDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let payload = payload.unwrap_or_default();

    let student = StudentService::new(&state.db)
        .create(CreateStudentParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = [StudentDto]),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    let dto: Vec<StudentDto> = students
        .into_iter()
        .map(|student| student.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = u32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 400, description = "Invalid student ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Student not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "student")?;

    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Replace every field of a student.
///
/// An empty or missing `student_section` clears the section.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = u32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student ID or request body", body = String, content_type = "text/plain"),
        (status = 404, description = "Student not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<Option<UpdateStudentDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "student")?;
    let Json(payload) = payload?;
    let payload = payload.unwrap_or_default();

    let student = StudentService::new(&state.db)
        .update(UpdateStudentParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = u32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Invalid student ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "student")?;

    StudentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
