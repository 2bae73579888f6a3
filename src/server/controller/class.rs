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
    model::class::{ClassDto, CreateClassDto, UpdateClassDto},
    server::{
        error::AppError,
        model::class::{CreateClassParam, UpdateClassParam},
        service::class::ClassService,
        state::AppState,
    },
};

/// Tag for grouping class endpoints in OpenAPI documentation
pub static CLASS_TAG: &str = "classes";

/// Create a new class.
///
/// # Returns
/// - `201 Created` - The class with its assigned ID
/// - `400 Bad Request` - Malformed request body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/classes",
    tag = CLASS_TAG,
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Successfully created class", body = ClassDto),
        (status = 400, description = "Invalid request body", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<Option<CreateClassDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let payload = payload.unwrap_or_default();

    let class = ClassService::new(&state.db)
        .create(CreateClassParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(class.into_dto())))
}

/// Get all classes.
#[utoipa::path(
    get,
    path = "/api/classes",
    tag = CLASS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved classes", body = [ClassDto]),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_classes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let classes = ClassService::new(&state.db).get_all().await?;

    let dto: Vec<ClassDto> = classes.into_iter().map(|class| class.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a specific class by ID.
///
/// # Returns
/// - `200 OK` - The class
/// - `400 Bad Request` - ID is not an unsigned integer
/// - `404 Not Found` - No class has this ID
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = u32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved class", body = ClassDto),
        (status = 400, description = "Invalid class ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Class not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_class_by_id(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "class")?;

    let class = ClassService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Replace every field of a class.
///
/// Fields missing from the body are reset to their zero value.
///
/// # Returns
/// - `200 OK` - The updated class
/// - `400 Bad Request` - Invalid ID or malformed request body
/// - `404 Not Found` - No class has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = u32, Path, description = "Class ID")
    ),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Successfully updated class", body = ClassDto),
        (status = 400, description = "Invalid class ID or request body", body = String, content_type = "text/plain"),
        (status = 404, description = "Class not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_class(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<Option<UpdateClassDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "class")?;
    let Json(payload) = payload?;
    let payload = payload.unwrap_or_default();

    let class = ClassService::new(&state.db)
        .update(UpdateClassParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Delete a class.
///
/// Deleting a class that does not exist also returns `204 No Content`.
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = u32, Path, description = "Class ID")
    ),
    responses(
        (status = 204, description = "Class deleted"),
        (status = 400, description = "Invalid class ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "class")?;

    ClassService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
