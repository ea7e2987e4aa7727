//! # API Errors
//!
//! Error types for the HTTP layer. Three client classes (missing or
//! invalid lookup key, malformed body, not found), one conflict class
//! (duplicate key / dangling foreign key), and engine failures as 500
//! with the underlying message echoed to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;
use crate::model::FieldError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// `get_*` called without both `key` and `value`
    #[error("Both key and value are required.")]
    MissingLookupParams,

    /// Lookup key is not a column of the entity
    #[error("Invalid key provided.")]
    InvalidKey,

    /// Lookup value does not coerce to the column's type
    #[error("{0}")]
    InvalidValue(#[from] FieldError),

    /// Composite-key route called without the full key
    #[error("{0}")]
    MissingParam(&'static str),

    /// Request body does not deserialize into the entity
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No row matched the key
    #[error("{entity} not found.")]
    NotFound { entity: &'static str },

    // ==================
    // Conflict (409)
    // ==================
    /// Duplicate primary key or dangling foreign key
    #[error("{message}")]
    Conflict { message: String, error: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Engine failure; the transaction was already rolled back
    #[error("{message}")]
    Internal { message: String, error: String },
}

impl ApiError {
    /// Classify a store/report failure under a per-endpoint message.
    pub fn from_db(err: DbError, entity: &'static str, context: &str) -> Self {
        match err {
            DbError::NotFound => ApiError::NotFound { entity },
            DbError::Constraint(msg) => ApiError::Conflict {
                message: context.to_string(),
                error: msg,
            },
            DbError::Engine(e) => ApiError::Internal {
                message: context.to_string(),
                error: e.to_string(),
            },
        }
    }

    /// Report failures have no not-found or conflict cases.
    pub fn internal(context: &str, err: DbError) -> Self {
        ApiError::Internal {
            message: context.to_string(),
            error: err.to_string(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingLookupParams
            | ApiError::InvalidKey
            | ApiError::InvalidValue(_)
            | ApiError::MissingParam(_)
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,

            ApiError::Conflict { .. } => StatusCode::CONFLICT,

            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Conflict { message, error } | ApiError::Internal { message, error } => {
                json!({ "Message": message, "Error": error })
            }
            other => json!({ "Error": other.to_string() }),
        };
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidKey.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingLookupParams.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound { entity: "Employee" }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal {
                message: "Error adding row.".into(),
                error: "disk I/O error".into()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_db_classification() {
        let err = ApiError::from_db(DbError::NotFound, "Project", "Error updating project.");
        assert!(matches!(err, ApiError::NotFound { entity: "Project" }));

        let err = ApiError::from_db(
            DbError::Constraint("UNIQUE constraint failed".into()),
            "Project",
            "Error adding row.",
        );
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::NotFound {
            entity: "Department location",
        };
        assert_eq!(err.to_string(), "Department location not found.");
    }
}
