//! Database error types

use thiserror::Error;

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

/// Database errors, classified so the HTTP layer can pick a status code
/// without inspecting SQLite internals.
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the lookup key
    #[error("record not found")]
    NotFound,

    /// Duplicate primary key or dangling foreign key
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Any other engine failure
    #[error("{0}")]
    Engine(#[source] rusqlite::Error),
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound,
            rusqlite::Error::SqliteFailure(code, msg)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                DbError::Constraint(msg.clone().unwrap_or_else(|| code.to_string()))
            }
            _ => DbError::Engine(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_maps_to_not_found() {
        let err = DbError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, DbError::NotFound));
    }

    #[test]
    fn test_constraint_failure_classified() {
        let ffi = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY,
        };
        let err = DbError::from(rusqlite::Error::SqliteFailure(
            ffi,
            Some("UNIQUE constraint failed: Employee.Ssn".to_string()),
        ));
        match err {
            DbError::Constraint(msg) => assert!(msg.contains("Employee.Ssn")),
            other => panic!("expected constraint error, got {:?}", other),
        }
    }
}
