//! # CRUD Store
//!
//! Per-table create / find-by-field / partial-update / delete over the
//! [`Database`](crate::db::Database). Every mutation runs inside its own
//! transaction (commit on success, rollback on error); inserts surface
//! duplicate keys and dangling foreign keys as
//! [`DbError::Constraint`](crate::db::DbError).
//!
//! Lookup column names come from the closed `*Field` enums in
//! [`crate::model`], so no caller-supplied string ever reaches SQL text.

pub mod department;
pub mod dependent;
pub mod dept_location;
pub mod employee;
pub mod project;
pub mod works_on;
