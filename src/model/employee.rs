//! Employee entity

use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::field::FieldKind;

/// An employee row.
///
/// Deserializes from the request body using schema column names and
/// serializes into responses with the human-readable labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename(serialize = "First Name", deserialize = "Fname"))]
    pub fname: String,
    #[serde(rename(serialize = "Last Name", deserialize = "Lname"))]
    pub lname: String,
    #[serde(rename(serialize = "SSN", deserialize = "Ssn"))]
    pub ssn: i64,
    #[serde(rename(serialize = "Birthday", deserialize = "Bdate"))]
    pub bdate: NaiveDate,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Salary")]
    pub salary: i64,
    #[serde(default, rename(serialize = "Super SSN", deserialize = "Super_ssn"))]
    pub super_ssn: Option<i64>,
    #[serde(rename(serialize = "Department Number", deserialize = "Dno"))]
    pub dno: i64,
}

impl Employee {
    /// Column list matching [`Employee::from_row`] ordering.
    pub const COLUMNS: &'static str =
        "Fname, Lname, Ssn, Bdate, Address, Sex, Salary, Super_ssn, Dno";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            fname: row.get(0)?,
            lname: row.get(1)?,
            ssn: row.get(2)?,
            bdate: row.get(3)?,
            address: row.get(4)?,
            sex: row.get(5)?,
            salary: row.get(6)?,
            super_ssn: row.get(7)?,
            dno: row.get(8)?,
        })
    }
}

/// Partial update for an employee; absent fields keep their prior value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePatch {
    #[serde(rename = "Fname")]
    pub fname: Option<String>,
    #[serde(rename = "Lname")]
    pub lname: Option<String>,
    #[serde(rename = "Bdate")]
    pub bdate: Option<NaiveDate>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Sex")]
    pub sex: Option<String>,
    #[serde(rename = "Salary")]
    pub salary: Option<i64>,
    #[serde(rename = "Super_ssn")]
    pub super_ssn: Option<i64>,
    #[serde(rename = "Dno")]
    pub dno: Option<i64>,
}

/// Legitimate lookup columns for `get_employee`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Fname,
    Lname,
    Ssn,
    Bdate,
    Address,
    Sex,
    Salary,
    SuperSsn,
    Dno,
}

impl EmployeeField {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Fname" => Some(Self::Fname),
            "Lname" => Some(Self::Lname),
            "Ssn" => Some(Self::Ssn),
            "Bdate" => Some(Self::Bdate),
            "Address" => Some(Self::Address),
            "Sex" => Some(Self::Sex),
            "Salary" => Some(Self::Salary),
            "Super_ssn" => Some(Self::SuperSsn),
            "Dno" => Some(Self::Dno),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Fname => "Fname",
            Self::Lname => "Lname",
            Self::Ssn => "Ssn",
            Self::Bdate => "Bdate",
            Self::Address => "Address",
            Self::Sex => "Sex",
            Self::Salary => "Salary",
            Self::SuperSsn => "Super_ssn",
            Self::Dno => "Dno",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Ssn | Self::Salary | Self::SuperSsn | Self::Dno => FieldKind::Int,
            Self::Bdate => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_uses_column_names() {
        let emp: Employee = serde_json::from_value(json!({
            "Fname": "John",
            "Lname": "Smith",
            "Ssn": 123456789,
            "Bdate": "1965-01-09",
            "Address": "731 Fondren, Houston, TX",
            "Sex": "M",
            "Salary": 30000,
            "Super_ssn": null,
            "Dno": 5
        }))
        .unwrap();
        assert_eq!(emp.ssn, 123456789);
        assert_eq!(emp.bdate.to_string(), "1965-01-09");
    }

    #[test]
    fn test_serialize_uses_labels() {
        let emp = Employee {
            fname: "John".into(),
            lname: "Smith".into(),
            ssn: 1,
            bdate: NaiveDate::from_ymd_opt(1965, 1, 9).unwrap(),
            address: "Houston".into(),
            sex: "M".into(),
            salary: 30000,
            super_ssn: None,
            dno: 5,
        };
        let value = serde_json::to_value(&emp).unwrap();
        assert_eq!(value["First Name"], "John");
        assert_eq!(value["Birthday"], "1965-01-09");
        assert_eq!(value["Department Number"], 5);
    }

    #[test]
    fn test_field_parse_rejects_unknown() {
        assert_eq!(EmployeeField::parse("Salary"), Some(EmployeeField::Salary));
        assert_eq!(EmployeeField::parse("salary"), None);
        assert_eq!(EmployeeField::parse("DROP TABLE"), None);
    }
}
