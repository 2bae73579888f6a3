//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so
//! controllers can return it directly.

pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Error bodies are plain text.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error carrying the database error text.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected internal state, such as a stored ID outside the API range.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

/// Malformed, ill-typed, or non-JSON request bodies.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest("Invalid request body".to_string())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types, with the error text as body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            err => {
                tracing::error!("{}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

/// Builds the 400 returned for a path ID that is not a plain unsigned integer.
///
/// # Arguments
/// - `resource` - Human-readable resource name used in the message (e.g. `"class"`)
pub fn invalid_id(resource: &str) -> AppError {
    AppError::BadRequest(format!("Invalid {} ID", resource))
}

/// Rejected path parameters share the resource-specific ID message.
pub fn from_path_rejection(resource: &str, rejection: PathRejection) -> AppError {
    tracing::debug!("Rejected {} ID: {}", resource, rejection.body_text());
    invalid_id(resource)
}
