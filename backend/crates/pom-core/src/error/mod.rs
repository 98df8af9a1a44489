use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A required key was absent (or `null`) in a submitted payload
    #[error("Missing `{field}` in request body {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    /// Path id and body `_id` of a rename request disagree
    #[error("Request path id ({path_id}) and request body id ({body_id}) must match {location}")]
    IdMismatch {
        path_id: String,
        body_id: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Client-facing message, without the source location.
    pub fn client_message(&self) -> String {
        match self {
            Self::MissingField { field, .. } => format!("Missing `{}` in request body", field),
            Self::IdMismatch {
                path_id, body_id, ..
            } => format!(
                "Request path id ({}) and request body id ({}) must match",
                path_id, body_id
            ),
            Self::Validation { message, .. } => message.clone(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
