//! # Data Model
//!
//! One module per entity of the COMPANY schema. Each entity carries:
//! - a record struct that deserializes from request bodies using the
//!   schema column names and serializes into responses with the
//!   human-readable labels;
//! - a `*Patch` struct for partial updates (absent fields keep their
//!   prior value);
//! - a closed `*Field` enum enumerating the columns a field-based lookup
//!   may filter on, each with its semantic [`field::FieldKind`].

pub mod department;
pub mod dependent;
pub mod dept_location;
pub mod employee;
pub mod field;
pub mod project;
pub mod works_on;

pub use department::{Department, DepartmentField, DepartmentPatch};
pub use dependent::{Dependent, DependentField, DependentPatch};
pub use dept_location::{DeptLocation, DeptLocationField, DeptLocationPatch};
pub use employee::{Employee, EmployeeField, EmployeePatch};
pub use field::{FieldError, FieldKind, FieldValue};
pub use project::{Project, ProjectField, ProjectPatch};
pub use works_on::{WorksOn, WorksOnField, WorksOnPatch};
