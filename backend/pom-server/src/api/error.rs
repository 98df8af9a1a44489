//! REST API error types
//!
//! Every error renders as `{"message": ...}` with its status code, except a
//! missing required field, which renders the message as plain text.

use pom_core::CoreError;
use pom_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const PROJECT_NOT_FOUND: &str = "Project Not Found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
/// Listing words its store failure differently from the write routes
pub const LIST_FAILED: &str = "Internal Server Error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required payload field absent (400, plain text)
    #[error("Missing field: {message} {location}")]
    MissingField {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn project_not_found() -> Self {
        ApiError::NotFound {
            message: PROJECT_NOT_FOUND.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Store failure on a route that reports every failure as a missing project.
    #[track_caller]
    pub fn store_not_found(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        Self::project_not_found()
    }

    /// Store failure reported as a 500 with the given client message.
    #[track_caller]
    pub fn store_internal(e: DbError, message: &str) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        match self {
            ApiError::MissingField { message, .. } => (status, message).into_response(),
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Internal { message, .. } => {
                (status, Json(ApiErrorResponse { message })).into_response()
            }
        }
    }
}

/// Payload validation failures never reach the store
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let message = e.client_message();
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::MissingField { .. } => ApiError::MissingField { message, location },
            CoreError::IdMismatch { .. } | CoreError::Validation { .. } => {
                ApiError::BadRequest { message, location }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        Self::store_internal(e, INTERNAL_SERVER_ERROR)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
