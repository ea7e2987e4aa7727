//! COMPANY schema DDL
//!
//! Six tables with foreign keys enforced by SQLite. `Department.Mgr_ssn`
//! and `Employee.Super_ssn` are nullable: the Department/Employee foreign
//! keys form a cycle, and a department must be creatable before its
//! manager exists. Dates are stored as `YYYY-MM-DD` text.

use rusqlite::Connection;

use super::errors::DbResult;

/// Idempotent schema bootstrap, executed on every open.
const SCHEMA_DDL: &str = "
BEGIN;

CREATE TABLE IF NOT EXISTS Department (
    Dnumber        INTEGER PRIMARY KEY,
    Dname          TEXT NOT NULL,
    Mgr_ssn        INTEGER REFERENCES Employee(Ssn),
    Mgr_start_date TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Employee (
    Ssn       INTEGER PRIMARY KEY,
    Fname     TEXT NOT NULL,
    Lname     TEXT NOT NULL,
    Bdate     TEXT NOT NULL,
    Address   TEXT NOT NULL,
    Sex       TEXT NOT NULL,
    Salary    INTEGER NOT NULL,
    Super_ssn INTEGER REFERENCES Employee(Ssn),
    Dno       INTEGER NOT NULL REFERENCES Department(Dnumber)
);

CREATE TABLE IF NOT EXISTS Dept_Locations (
    Dnumber   INTEGER NOT NULL REFERENCES Department(Dnumber),
    Dlocation TEXT NOT NULL,
    PRIMARY KEY (Dnumber, Dlocation)
);

CREATE TABLE IF NOT EXISTS Project (
    Pnumber   INTEGER PRIMARY KEY,
    Pname     TEXT NOT NULL,
    Plocation TEXT NOT NULL,
    Dnum      INTEGER NOT NULL REFERENCES Department(Dnumber)
);

CREATE TABLE IF NOT EXISTS Works_On (
    Essn  INTEGER NOT NULL REFERENCES Employee(Ssn),
    Pno   INTEGER NOT NULL REFERENCES Project(Pnumber),
    Hours INTEGER NOT NULL,
    PRIMARY KEY (Essn, Pno)
);

CREATE TABLE IF NOT EXISTS Dependent (
    Essn           INTEGER NOT NULL REFERENCES Employee(Ssn),
    Dependent_name TEXT NOT NULL,
    Sex            TEXT NOT NULL,
    Bdate          TEXT NOT NULL,
    Relationship   TEXT NOT NULL,
    PRIMARY KEY (Essn, Dependent_name)
);

COMMIT;
";

/// Apply the schema to a freshly opened connection.
pub fn apply(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_DDL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        apply(&conn).unwrap();
        apply(&conn).unwrap();
    }

    #[test]
    fn test_all_tables_exist() {
        let conn = Connection::open_in_memory().unwrap();
        apply(&conn).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN
                 ('Employee', 'Department', 'Dept_Locations', 'Project', 'Works_On', 'Dependent')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 6);
    }
}
