//! Project entity

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::field::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename(serialize = "Project Name", deserialize = "Pname"))]
    pub pname: String,
    #[serde(rename(serialize = "Project Number", deserialize = "Pnumber"))]
    pub pnumber: i64,
    #[serde(rename(serialize = "Project Location", deserialize = "Plocation"))]
    pub plocation: String,
    #[serde(rename(serialize = "Department Number", deserialize = "Dnum"))]
    pub dnum: i64,
}

impl Project {
    pub const COLUMNS: &'static str = "Pname, Pnumber, Plocation, Dnum";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            pname: row.get(0)?,
            pnumber: row.get(1)?,
            plocation: row.get(2)?,
            dnum: row.get(3)?,
        })
    }
}

/// Partial update for a project
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    #[serde(rename = "Pname")]
    pub pname: Option<String>,
    #[serde(rename = "Plocation")]
    pub plocation: Option<String>,
    #[serde(rename = "Dnum")]
    pub dnum: Option<i64>,
}

/// Legitimate lookup columns for `get_project`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Pname,
    Pnumber,
    Plocation,
    Dnum,
}

impl ProjectField {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Pname" => Some(Self::Pname),
            "Pnumber" => Some(Self::Pnumber),
            "Plocation" => Some(Self::Plocation),
            "Dnum" => Some(Self::Dnum),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Pname => "Pname",
            Self::Pnumber => "Pnumber",
            Self::Plocation => "Plocation",
            Self::Dnum => "Dnum",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Pnumber | Self::Dnum => FieldKind::Int,
            Self::Pname | Self::Plocation => FieldKind::Text,
        }
    }
}
