//! Project CRUD

use rusqlite::params;

use crate::db::{Database, DbError, DbResult};
use crate::model::{FieldValue, Project, ProjectField, ProjectPatch};

pub fn insert(db: &Database, project: &Project) -> DbResult<()> {
    db.write(|tx| {
        tx.execute(
            "INSERT INTO Project (Pname, Pnumber, Plocation, Dnum) VALUES (?1, ?2, ?3, ?4)",
            params![
                project.pname,
                project.pnumber,
                project.plocation,
                project.dnum
            ],
        )?;
        Ok(())
    })
}

pub fn find_by_field(db: &Database, field: ProjectField, value: &FieldValue) -> DbResult<Project> {
    db.read(|conn| {
        let sql = format!(
            "SELECT {} FROM Project WHERE {} = ?1 LIMIT 1",
            Project::COLUMNS,
            field.column()
        );
        Ok(conn.query_row(&sql, params![value], Project::from_row)?)
    })
}

pub fn update(db: &Database, pnumber: i64, patch: &ProjectPatch) -> DbResult<()> {
    db.write(|tx| {
        let sql = format!("SELECT {} FROM Project WHERE Pnumber = ?1", Project::COLUMNS);
        let mut project = tx.query_row(&sql, params![pnumber], Project::from_row)?;

        if let Some(v) = &patch.pname {
            project.pname = v.clone();
        }
        if let Some(v) = &patch.plocation {
            project.plocation = v.clone();
        }
        if let Some(v) = patch.dnum {
            project.dnum = v;
        }

        tx.execute(
            "UPDATE Project SET Pname = ?1, Plocation = ?2, Dnum = ?3 WHERE Pnumber = ?4",
            params![project.pname, project.plocation, project.dnum, pnumber],
        )?;
        Ok(())
    })
}

pub fn delete(db: &Database, pnumber: i64) -> DbResult<()> {
    db.write(|tx| {
        let n = tx.execute("DELETE FROM Project WHERE Pnumber = ?1", params![pnumber])?;
        if n == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    })
}
