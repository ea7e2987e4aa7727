//! Typed lookup fields
//!
//! Field-based lookups (`get_*?key=&value=`) arrive as two strings. Each
//! entity declares a closed field enum mapping the key to a column and a
//! [`FieldKind`]; the raw value is coerced here before it ever reaches
//! the query, so an unknown key or a malformed value is a client error,
//! never an engine error.

use chrono::NaiveDate;
use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;
use thiserror::Error;

/// Errors from coercing a raw lookup value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("value '{0}' is not an integer")]
    InvalidInt(String),

    #[error("value '{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Text,
    Date,
}

impl FieldKind {
    /// Coerce a raw query-string value to this kind.
    pub fn coerce(self, raw: &str) -> Result<FieldValue, FieldError> {
        match self {
            FieldKind::Int => raw
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|_| FieldError::InvalidInt(raw.to_string())),
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(FieldValue::Date)
                .map_err(|_| FieldError::InvalidDate(raw.to_string())),
        }
    }
}

/// A coerced lookup value, bindable as a SQL parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FieldValue::Int(v) => v.to_sql(),
            FieldValue::Text(v) => v.to_sql(),
            FieldValue::Date(v) => v.to_sql(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int() {
        assert_eq!(FieldKind::Int.coerce("42"), Ok(FieldValue::Int(42)));
        assert!(matches!(
            FieldKind::Int.coerce("forty-two"),
            Err(FieldError::InvalidInt(_))
        ));
    }

    #[test]
    fn test_coerce_date() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        assert_eq!(
            FieldKind::Date.coerce("1990-05-17"),
            Ok(FieldValue::Date(date))
        );
        assert!(matches!(
            FieldKind::Date.coerce("17/05/1990"),
            Err(FieldError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_coerce_text_is_identity() {
        assert_eq!(
            FieldKind::Text.coerce("Houston"),
            Ok(FieldValue::Text("Houston".to_string()))
        );
    }
}
