use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{class::*, student::*},
    state::AppState,
};

/// Path the generated OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School API",
        version = "1.0",
        description = "This is a sample school API server."
    ),
    tags(
        (name = "classes", description = "Class management"),
        (name = "students", description = "Student management")
    )
)]
struct ApiDoc;

/// Builds the API router with the Swagger UI mounted under `/swagger/`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_class, get_all_classes))
        .routes(routes!(get_class_by_id, update_class, delete_class))
        .routes(routes!(create_student, get_all_students))
        .routes(routes!(get_student_by_id, update_student, delete_student))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger").url(OPENAPI_PATH, api))
        .layer(TraceLayer::new_for_http())
}
