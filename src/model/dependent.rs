//! Dependent entity (composite key: Essn + Dependent_name)

use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::field::FieldKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    #[serde(rename(serialize = "Employee SSN", deserialize = "Essn"))]
    pub essn: i64,
    #[serde(rename(serialize = "Name of Dependent", deserialize = "Dependent_name"))]
    pub dependent_name: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename(serialize = "Birthday", deserialize = "Bdate"))]
    pub bdate: NaiveDate,
    #[serde(rename = "Relationship")]
    pub relationship: String,
}

impl Dependent {
    pub const COLUMNS: &'static str = "Essn, Dependent_name, Sex, Bdate, Relationship";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            essn: row.get(0)?,
            dependent_name: row.get(1)?,
            sex: row.get(2)?,
            bdate: row.get(3)?,
            relationship: row.get(4)?,
        })
    }
}

/// Partial update; the row is addressed by its full composite key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DependentPatch {
    #[serde(rename = "Essn")]
    pub essn: Option<i64>,
    #[serde(rename = "Dependent_name")]
    pub dependent_name: Option<String>,
    #[serde(rename = "Sex")]
    pub sex: Option<String>,
    #[serde(rename = "Bdate")]
    pub bdate: Option<NaiveDate>,
    #[serde(rename = "Relationship")]
    pub relationship: Option<String>,
}

/// Legitimate lookup columns for `get_dependent`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependentField {
    Essn,
    DependentName,
    Sex,
    Bdate,
    Relationship,
}

impl DependentField {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Essn" => Some(Self::Essn),
            "Dependent_name" => Some(Self::DependentName),
            "Sex" => Some(Self::Sex),
            "Bdate" => Some(Self::Bdate),
            "Relationship" => Some(Self::Relationship),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Essn => "Essn",
            Self::DependentName => "Dependent_name",
            Self::Sex => "Sex",
            Self::Bdate => "Bdate",
            Self::Relationship => "Relationship",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Essn => FieldKind::Int,
            Self::Bdate => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}
