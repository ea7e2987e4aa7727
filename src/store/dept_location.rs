//! Dept_Locations CRUD
//!
//! Rows are addressed by the full composite key (Dnumber, Dlocation).
//! Half a key could match several rows, so partial keys are rejected at
//! the HTTP layer before reaching here.

use rusqlite::params;

use crate::db::{Database, DbError, DbResult};
use crate::model::{DeptLocation, DeptLocationField, DeptLocationPatch, FieldValue};

pub fn insert(db: &Database, loc: &DeptLocation) -> DbResult<()> {
    db.write(|tx| {
        tx.execute(
            "INSERT INTO Dept_Locations (Dnumber, Dlocation) VALUES (?1, ?2)",
            params![loc.dnumber, loc.dlocation],
        )?;
        Ok(())
    })
}

pub fn find_by_field(
    db: &Database,
    field: DeptLocationField,
    value: &FieldValue,
) -> DbResult<DeptLocation> {
    db.read(|conn| {
        let sql = format!(
            "SELECT {} FROM Dept_Locations WHERE {} = ?1 LIMIT 1",
            DeptLocation::COLUMNS,
            field.column()
        );
        Ok(conn.query_row(&sql, params![value], DeptLocation::from_row)?)
    })
}

pub fn update(
    db: &Database,
    dnumber: i64,
    dlocation: &str,
    patch: &DeptLocationPatch,
) -> DbResult<()> {
    db.write(|tx| {
        let sql = format!(
            "SELECT {} FROM Dept_Locations WHERE Dnumber = ?1 AND Dlocation = ?2",
            DeptLocation::COLUMNS
        );
        let mut loc = tx.query_row(&sql, params![dnumber, dlocation], DeptLocation::from_row)?;

        if let Some(v) = patch.dnumber {
            loc.dnumber = v;
        }
        if let Some(v) = &patch.dlocation {
            loc.dlocation = v.clone();
        }

        tx.execute(
            "UPDATE Dept_Locations SET Dnumber = ?1, Dlocation = ?2
             WHERE Dnumber = ?3 AND Dlocation = ?4",
            params![loc.dnumber, loc.dlocation, dnumber, dlocation],
        )?;
        Ok(())
    })
}

pub fn delete(db: &Database, dnumber: i64, dlocation: &str) -> DbResult<()> {
    db.write(|tx| {
        let n = tx.execute(
            "DELETE FROM Dept_Locations WHERE Dnumber = ?1 AND Dlocation = ?2",
            params![dnumber, dlocation],
        )?;
        if n == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    })
}
