//! Department entity

use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::field::FieldKind;

/// A department row. `Mgr_ssn` is nullable so a department can exist
/// before its manager does (the Department/Employee foreign keys are
/// mutually referential).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename(serialize = "Department Name", deserialize = "Dname"))]
    pub dname: String,
    #[serde(rename(serialize = "Department Number", deserialize = "Dnumber"))]
    pub dnumber: i64,
    #[serde(default, rename(serialize = "Manager SSN", deserialize = "Mgr_ssn"))]
    pub mgr_ssn: Option<i64>,
    #[serde(rename(serialize = "Manager Start Date", deserialize = "Mgr_start_date"))]
    pub mgr_start_date: NaiveDate,
}

impl Department {
    pub const COLUMNS: &'static str = "Dname, Dnumber, Mgr_ssn, Mgr_start_date";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            dname: row.get(0)?,
            dnumber: row.get(1)?,
            mgr_ssn: row.get(2)?,
            mgr_start_date: row.get(3)?,
        })
    }
}

/// Partial update for a department
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentPatch {
    #[serde(rename = "Dname")]
    pub dname: Option<String>,
    #[serde(rename = "Mgr_ssn")]
    pub mgr_ssn: Option<i64>,
    #[serde(rename = "Mgr_start_date")]
    pub mgr_start_date: Option<NaiveDate>,
}

/// Legitimate lookup columns for `get_department`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentField {
    Dname,
    Dnumber,
    MgrSsn,
    MgrStartDate,
}

impl DepartmentField {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Dname" => Some(Self::Dname),
            "Dnumber" => Some(Self::Dnumber),
            "Mgr_ssn" => Some(Self::MgrSsn),
            "Mgr_start_date" => Some(Self::MgrStartDate),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Dname => "Dname",
            Self::Dnumber => "Dnumber",
            Self::MgrSsn => "Mgr_ssn",
            Self::MgrStartDate => "Mgr_start_date",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Dnumber | Self::MgrSsn => FieldKind::Int,
            Self::MgrStartDate => FieldKind::Date,
            Self::Dname => FieldKind::Text,
        }
    }
}
