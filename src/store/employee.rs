//! Employee CRUD

use rusqlite::params;

use crate::db::{Database, DbError, DbResult};
use crate::model::{Employee, EmployeeField, EmployeePatch, FieldValue};

pub fn insert(db: &Database, emp: &Employee) -> DbResult<()> {
    db.write(|tx| {
        tx.execute(
            "INSERT INTO Employee (Fname, Lname, Ssn, Bdate, Address, Sex, Salary, Super_ssn, Dno)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                emp.fname, emp.lname, emp.ssn, emp.bdate, emp.address, emp.sex, emp.salary,
                emp.super_ssn, emp.dno
            ],
        )?;
        Ok(())
    })
}

/// First row matching the given column, in rowid order.
pub fn find_by_field(db: &Database, field: EmployeeField, value: &FieldValue) -> DbResult<Employee> {
    db.read(|conn| {
        let sql = format!(
            "SELECT {} FROM Employee WHERE {} = ?1 LIMIT 1",
            Employee::COLUMNS,
            field.column()
        );
        Ok(conn.query_row(&sql, params![value], Employee::from_row)?)
    })
}

pub fn update(db: &Database, ssn: i64, patch: &EmployeePatch) -> DbResult<()> {
    db.write(|tx| {
        let sql = format!("SELECT {} FROM Employee WHERE Ssn = ?1", Employee::COLUMNS);
        let mut emp = tx.query_row(&sql, params![ssn], Employee::from_row)?;

        if let Some(v) = &patch.fname {
            emp.fname = v.clone();
        }
        if let Some(v) = &patch.lname {
            emp.lname = v.clone();
        }
        if let Some(v) = patch.bdate {
            emp.bdate = v;
        }
        if let Some(v) = &patch.address {
            emp.address = v.clone();
        }
        if let Some(v) = &patch.sex {
            emp.sex = v.clone();
        }
        if let Some(v) = patch.salary {
            emp.salary = v;
        }
        if let Some(v) = patch.super_ssn {
            emp.super_ssn = Some(v);
        }
        if let Some(v) = patch.dno {
            emp.dno = v;
        }

        tx.execute(
            "UPDATE Employee
             SET Fname = ?1, Lname = ?2, Bdate = ?3, Address = ?4, Sex = ?5,
                 Salary = ?6, Super_ssn = ?7, Dno = ?8
             WHERE Ssn = ?9",
            params![
                emp.fname, emp.lname, emp.bdate, emp.address, emp.sex, emp.salary, emp.super_ssn,
                emp.dno, ssn
            ],
        )?;
        Ok(())
    })
}

pub fn delete(db: &Database, ssn: i64) -> DbResult<()> {
    db.write(|tx| {
        let n = tx.execute("DELETE FROM Employee WHERE Ssn = ?1", params![ssn])?;
        if n == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    })
}
