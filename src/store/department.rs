//! Department CRUD

use rusqlite::params;

use crate::db::{Database, DbError, DbResult};
use crate::model::{Department, DepartmentField, DepartmentPatch, FieldValue};

pub fn insert(db: &Database, dept: &Department) -> DbResult<()> {
    db.write(|tx| {
        tx.execute(
            "INSERT INTO Department (Dname, Dnumber, Mgr_ssn, Mgr_start_date)
             VALUES (?1, ?2, ?3, ?4)",
            params![dept.dname, dept.dnumber, dept.mgr_ssn, dept.mgr_start_date],
        )?;
        Ok(())
    })
}

pub fn find_by_field(
    db: &Database,
    field: DepartmentField,
    value: &FieldValue,
) -> DbResult<Department> {
    db.read(|conn| {
        let sql = format!(
            "SELECT {} FROM Department WHERE {} = ?1 LIMIT 1",
            Department::COLUMNS,
            field.column()
        );
        Ok(conn.query_row(&sql, params![value], Department::from_row)?)
    })
}

pub fn update(db: &Database, dnumber: i64, patch: &DepartmentPatch) -> DbResult<()> {
    db.write(|tx| {
        let sql = format!(
            "SELECT {} FROM Department WHERE Dnumber = ?1",
            Department::COLUMNS
        );
        let mut dept = tx.query_row(&sql, params![dnumber], Department::from_row)?;

        if let Some(v) = &patch.dname {
            dept.dname = v.clone();
        }
        if let Some(v) = patch.mgr_ssn {
            dept.mgr_ssn = Some(v);
        }
        if let Some(v) = patch.mgr_start_date {
            dept.mgr_start_date = v;
        }

        tx.execute(
            "UPDATE Department SET Dname = ?1, Mgr_ssn = ?2, Mgr_start_date = ?3 WHERE Dnumber = ?4",
            params![dept.dname, dept.mgr_ssn, dept.mgr_start_date, dnumber],
        )?;
        Ok(())
    })
}

pub fn delete(db: &Database, dnumber: i64) -> DbResult<()> {
    db.write(|tx| {
        let n = tx.execute("DELETE FROM Department WHERE Dnumber = ?1", params![dnumber])?;
        if n == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    })
}
