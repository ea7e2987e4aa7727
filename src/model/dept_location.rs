//! Dept_Locations entity (composite key: Dnumber + Dlocation)

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::field::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeptLocation {
    #[serde(rename(serialize = "Department Number", deserialize = "Dnumber"))]
    pub dnumber: i64,
    #[serde(rename(serialize = "Department Location", deserialize = "Dlocation"))]
    pub dlocation: String,
}

impl DeptLocation {
    pub const COLUMNS: &'static str = "Dnumber, Dlocation";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            dnumber: row.get(0)?,
            dlocation: row.get(1)?,
        })
    }
}

/// Partial update; the row is addressed by its full composite key, and
/// either column may be rewritten.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeptLocationPatch {
    #[serde(rename = "Dnumber")]
    pub dnumber: Option<i64>,
    #[serde(rename = "Dlocation")]
    pub dlocation: Option<String>,
}

/// Legitimate lookup columns for `get_dept_location`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeptLocationField {
    Dnumber,
    Dlocation,
}

impl DeptLocationField {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Dnumber" => Some(Self::Dnumber),
            "Dlocation" => Some(Self::Dlocation),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Dnumber => "Dnumber",
            Self::Dlocation => "Dlocation",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Dnumber => FieldKind::Int,
            Self::Dlocation => FieldKind::Text,
        }
    }
}
