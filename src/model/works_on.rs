//! Works_On entity (composite key: Essn + Pno)

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::field::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksOn {
    #[serde(rename(serialize = "Employee SSN", deserialize = "Essn"))]
    pub essn: i64,
    #[serde(rename(serialize = "Project Number", deserialize = "Pno"))]
    pub pno: i64,
    #[serde(rename = "Hours")]
    pub hours: i64,
}

impl WorksOn {
    pub const COLUMNS: &'static str = "Essn, Pno, Hours";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            essn: row.get(0)?,
            pno: row.get(1)?,
            hours: row.get(2)?,
        })
    }
}

/// Partial update; the row is addressed by its full composite key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorksOnPatch {
    #[serde(rename = "Essn")]
    pub essn: Option<i64>,
    #[serde(rename = "Pno")]
    pub pno: Option<i64>,
    #[serde(rename = "Hours")]
    pub hours: Option<i64>,
}

/// Legitimate lookup columns for `get_works_on`; every column is an
/// integer, so every lookup value coerces to int.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorksOnField {
    Essn,
    Pno,
    Hours,
}

impl WorksOnField {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Essn" => Some(Self::Essn),
            "Pno" => Some(Self::Pno),
            "Hours" => Some(Self::Hours),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Essn => "Essn",
            Self::Pno => "Pno",
            Self::Hours => "Hours",
        }
    }

    pub fn kind(self) -> FieldKind {
        FieldKind::Int
    }
}
