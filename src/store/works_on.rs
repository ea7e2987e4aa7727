//! Works_On CRUD
//!
//! Rows are addressed by the full composite key (Essn, Pno).

use rusqlite::params;

use crate::db::{Database, DbError, DbResult};
use crate::model::{FieldValue, WorksOn, WorksOnField, WorksOnPatch};

pub fn insert(db: &Database, assignment: &WorksOn) -> DbResult<()> {
    db.write(|tx| {
        tx.execute(
            "INSERT INTO Works_On (Essn, Pno, Hours) VALUES (?1, ?2, ?3)",
            params![assignment.essn, assignment.pno, assignment.hours],
        )?;
        Ok(())
    })
}

pub fn find_by_field(db: &Database, field: WorksOnField, value: &FieldValue) -> DbResult<WorksOn> {
    db.read(|conn| {
        let sql = format!(
            "SELECT {} FROM Works_On WHERE {} = ?1 LIMIT 1",
            WorksOn::COLUMNS,
            field.column()
        );
        Ok(conn.query_row(&sql, params![value], WorksOn::from_row)?)
    })
}

pub fn update(db: &Database, essn: i64, pno: i64, patch: &WorksOnPatch) -> DbResult<()> {
    db.write(|tx| {
        let sql = format!(
            "SELECT {} FROM Works_On WHERE Essn = ?1 AND Pno = ?2",
            WorksOn::COLUMNS
        );
        let mut assignment = tx.query_row(&sql, params![essn, pno], WorksOn::from_row)?;

        if let Some(v) = patch.essn {
            assignment.essn = v;
        }
        if let Some(v) = patch.pno {
            assignment.pno = v;
        }
        if let Some(v) = patch.hours {
            assignment.hours = v;
        }

        tx.execute(
            "UPDATE Works_On SET Essn = ?1, Pno = ?2, Hours = ?3 WHERE Essn = ?4 AND Pno = ?5",
            params![assignment.essn, assignment.pno, assignment.hours, essn, pno],
        )?;
        Ok(())
    })
}

pub fn delete(db: &Database, essn: i64, pno: i64) -> DbResult<()> {
    db.write(|tx| {
        let n = tx.execute(
            "DELETE FROM Works_On WHERE Essn = ?1 AND Pno = ?2",
            params![essn, pno],
        )?;
        if n == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    })
}
