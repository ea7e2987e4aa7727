//! Lookup query parsing for the `get_*` endpoints

use serde::Deserialize;

use super::errors::{ApiError, ApiResult};

/// `?key=<column>&value=<raw>` — both are required.
#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl LookupQuery {
    pub fn require(self) -> ApiResult<(String, String)> {
        match (self.key, self.value) {
            (Some(key), Some(value)) if !key.is_empty() && !value.is_empty() => Ok((key, value)),
            _ => Err(ApiError::MissingLookupParams),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_present() {
        let q = LookupQuery {
            key: Some("Ssn".into()),
            value: Some("123".into()),
        };
        assert_eq!(q.require().unwrap(), ("Ssn".into(), "123".into()));
    }

    #[test]
    fn test_missing_or_empty_rejected() {
        let q = LookupQuery {
            key: Some("Ssn".into()),
            value: None,
        };
        assert!(matches!(q.require(), Err(ApiError::MissingLookupParams)));

        let q = LookupQuery {
            key: Some("".into()),
            value: Some("123".into()),
        };
        assert!(matches!(q.require(), Err(ApiError::MissingLookupParams)));
    }
}
