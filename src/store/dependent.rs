//! Dependent CRUD
//!
//! Rows are addressed by the full composite key (Essn, Dependent_name).

use rusqlite::params;

use crate::db::{Database, DbError, DbResult};
use crate::model::{Dependent, DependentField, DependentPatch, FieldValue};

pub fn insert(db: &Database, dep: &Dependent) -> DbResult<()> {
    db.write(|tx| {
        tx.execute(
            "INSERT INTO Dependent (Essn, Dependent_name, Sex, Bdate, Relationship)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![dep.essn, dep.dependent_name, dep.sex, dep.bdate, dep.relationship],
        )?;
        Ok(())
    })
}

pub fn find_by_field(
    db: &Database,
    field: DependentField,
    value: &FieldValue,
) -> DbResult<Dependent> {
    db.read(|conn| {
        let sql = format!(
            "SELECT {} FROM Dependent WHERE {} = ?1 LIMIT 1",
            Dependent::COLUMNS,
            field.column()
        );
        Ok(conn.query_row(&sql, params![value], Dependent::from_row)?)
    })
}

pub fn update(db: &Database, essn: i64, name: &str, patch: &DependentPatch) -> DbResult<()> {
    db.write(|tx| {
        let sql = format!(
            "SELECT {} FROM Dependent WHERE Essn = ?1 AND Dependent_name = ?2",
            Dependent::COLUMNS
        );
        let mut dep = tx.query_row(&sql, params![essn, name], Dependent::from_row)?;

        if let Some(v) = patch.essn {
            dep.essn = v;
        }
        if let Some(v) = &patch.dependent_name {
            dep.dependent_name = v.clone();
        }
        if let Some(v) = &patch.sex {
            dep.sex = v.clone();
        }
        if let Some(v) = patch.bdate {
            dep.bdate = v;
        }
        if let Some(v) = &patch.relationship {
            dep.relationship = v.clone();
        }

        tx.execute(
            "UPDATE Dependent
             SET Essn = ?1, Dependent_name = ?2, Sex = ?3, Bdate = ?4, Relationship = ?5
             WHERE Essn = ?6 AND Dependent_name = ?7",
            params![
                dep.essn,
                dep.dependent_name,
                dep.sex,
                dep.bdate,
                dep.relationship,
                essn,
                name
            ],
        )?;
        Ok(())
    })
}

pub fn delete(db: &Database, essn: i64, name: &str) -> DbResult<()> {
    db.write(|tx| {
        let n = tx.execute(
            "DELETE FROM Dependent WHERE Essn = ?1 AND Dependent_name = ?2",
            params![essn, name],
        )?;
        if n == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    })
}
