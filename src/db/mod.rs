//! # Database Access
//!
//! Connection management and transaction scoping over the embedded
//! SQLite engine. There is no shared session state: reads run against
//! the connection directly, and every mutation runs inside its own
//! transaction that commits on success and rolls back on any error.

mod errors;
mod schema;

pub use errors::{DbError, DbResult};

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Transaction};

/// Handle to the company database.
///
/// The connection is serialized behind a mutex; requests are independent
/// and stateless, so per-request locking is the only coordination needed.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (and if necessary create) the database file, enabling foreign
    /// key enforcement and applying the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        Self::configure(Connection::open(path)?)
    }

    /// Open an in-memory database, for tests and one-shot use.
    pub fn open_in_memory() -> DbResult<Self> {
        Self::configure(Connection::open_in_memory()?)
    }

    fn configure(conn: Connection) -> DbResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        schema::apply(&conn)?;
        tracing::debug!("database opened, schema applied");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another request panicked mid-query;
        // the connection itself is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run a read-only operation against the connection.
    pub fn read<T>(&self, op: impl FnOnce(&Connection) -> DbResult<T>) -> DbResult<T> {
        let conn = self.lock();
        op(&conn)
    }

    /// Run a mutating operation inside a transaction.
    ///
    /// Commits if the closure succeeds; rolls back on any error before
    /// the error is surfaced to the caller.
    pub fn write<T>(&self, op: impl FnOnce(&Transaction<'_>) -> DbResult<T>) -> DbResult<T> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        match op(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                let _ = tx.rollback();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    #[test]
    fn test_write_commits_on_ok() {
        let db = Database::open_in_memory().unwrap();
        db.write(|tx| {
            tx.execute(
                "INSERT INTO Department (Dnumber, Dname, Mgr_ssn, Mgr_start_date)
                 VALUES (?1, ?2, NULL, ?3)",
                params![5, "Research", "2020-01-01"],
            )?;
            Ok(())
        })
        .unwrap();

        let count = db
            .read(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM Department", [], |row| {
                    row.get::<_, i64>(0)
                })?)
            })
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_write_rolls_back_on_err() {
        let db = Database::open_in_memory().unwrap();
        let result: DbResult<()> = db.write(|tx| {
            tx.execute(
                "INSERT INTO Department (Dnumber, Dname, Mgr_ssn, Mgr_start_date)
                 VALUES (?1, ?2, NULL, ?3)",
                params![5, "Research", "2020-01-01"],
            )?;
            Err(DbError::NotFound)
        });
        assert!(result.is_err());

        let count = db
            .read(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM Department", [], |row| {
                    row.get::<_, i64>(0)
                })?)
            })
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_foreign_keys_enforced() {
        let db = Database::open_in_memory().unwrap();
        // Employee 999 does not exist, so the assignment must be rejected.
        let result = db.write(|tx| {
            tx.execute(
                "INSERT INTO Works_On (Essn, Pno, Hours) VALUES (999, 1, 10)",
                [],
            )?;
            Ok(())
        });
        assert!(matches!(result, Err(DbError::Constraint(_))));
    }
}
