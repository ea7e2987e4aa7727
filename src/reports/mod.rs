//! # Aggregate Reports
//!
//! The five read-only report queries. Each joins, groups, and aggregates
//! across the COMPANY schema and returns a typed row with the response
//! labels baked in via serde renames. Outer joins keep departments and
//! projects with no related rows in the result, with aggregates
//! defaulting to 0 rather than null.

use rusqlite::Connection;
use serde::Serialize;

use crate::db::{Database, DbResult};

/// Row of `/high_dept_salary`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighSalaryDepartment {
    #[serde(rename = "Department Name")]
    pub department: String,
    #[serde(rename = "Number of Employees")]
    pub employees: i64,
}

/// Departments whose average employee salary is strictly greater than
/// 30000, with their employee counts. A department averaging exactly
/// 30000 is excluded.
pub fn high_salary_departments(db: &Database) -> DbResult<Vec<HighSalaryDepartment>> {
    db.read(|conn| {
        collect(
            conn,
            "SELECT d.Dname, COUNT(e.Ssn)
             FROM Department d
             JOIN Employee e ON e.Dno = d.Dnumber
             GROUP BY d.Dnumber, d.Dname
             HAVING AVG(e.Salary) > 30000
             ORDER BY d.Dname",
            |row| {
                Ok(HighSalaryDepartment {
                    department: row.get(0)?,
                    employees: row.get(1)?,
                })
            },
        )
    })
}

/// Row of `/dept_details`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentDetails {
    #[serde(rename = "Department Name")]
    pub department: String,
    #[serde(rename = "Manager Name")]
    pub manager: Option<String>,
    #[serde(rename = "Number of Employees")]
    pub employees: i64,
    #[serde(rename = "Number of Projects")]
    pub projects: i64,
}

/// Every department with its manager's name, employee count, and project
/// count. Outer joins keep zero-employee and zero-project departments in
/// the result with counts of 0; a department without a manager yet shows
/// a null manager name.
pub fn department_details(db: &Database) -> DbResult<Vec<DepartmentDetails>> {
    db.read(|conn| {
        collect(
            conn,
            "SELECT d.Dname,
                    m.Fname, m.Lname,
                    COALESCE(ec.employee_count, 0),
                    COUNT(p.Pnumber)
             FROM Department d
             LEFT JOIN Employee m ON d.Mgr_ssn = m.Ssn
             LEFT JOIN Project p ON p.Dnum = d.Dnumber
             LEFT JOIN (SELECT Dno, COUNT(Ssn) AS employee_count
                        FROM Employee GROUP BY Dno) ec
               ON ec.Dno = d.Dnumber
             GROUP BY d.Dnumber, d.Dname, m.Fname, m.Lname, ec.employee_count
             ORDER BY d.Dname",
            |row| {
                let fname: Option<String> = row.get(1)?;
                let lname: Option<String> = row.get(2)?;
                Ok(DepartmentDetails {
                    department: row.get(0)?,
                    manager: match (fname, lname) {
                        (Some(f), Some(l)) => Some(format!("{} {}", f, l)),
                        _ => None,
                    },
                    employees: row.get(3)?,
                    projects: row.get(4)?,
                })
            },
        )
    })
}

/// Row of `/project_details` and `/projects_multiple_employees`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetails {
    #[serde(rename = "Project Name")]
    pub project: String,
    #[serde(rename = "Controlling Department")]
    pub department: String,
    #[serde(rename = "Number of Employees")]
    pub employees: i64,
    #[serde(rename = "Total Hours")]
    pub total_hours: i64,
}

const PROJECT_DETAILS_SQL: &str = "SELECT p.Pname, d.Dname, COUNT(w.Essn), COALESCE(SUM(w.Hours), 0)
     FROM Project p
     JOIN Department d ON p.Dnum = d.Dnumber
     LEFT JOIN Works_On w ON w.Pno = p.Pnumber
     GROUP BY p.Pnumber, p.Pname, d.Dname";

fn project_details_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProjectDetails> {
    Ok(ProjectDetails {
        project: row.get(0)?,
        department: row.get(1)?,
        employees: row.get(2)?,
        total_hours: row.get(3)?,
    })
}

/// Every project with its controlling department, the number of assigned
/// employees, and total weekly hours. Projects with no assignments still
/// appear, with both aggregates at 0.
pub fn project_details(db: &Database) -> DbResult<Vec<ProjectDetails>> {
    db.read(|conn| {
        collect(
            conn,
            &format!("{} ORDER BY p.Pname", PROJECT_DETAILS_SQL),
            project_details_row,
        )
    })
}

/// Same view as [`project_details`], filtered to projects with more than
/// one assigned employee.
pub fn busy_projects(db: &Database) -> DbResult<Vec<ProjectDetails>> {
    db.read(|conn| {
        collect(
            conn,
            &format!(
                "{} HAVING COUNT(w.Essn) > 1 ORDER BY p.Pname",
                PROJECT_DETAILS_SQL
            ),
            project_details_row,
        )
    })
}

/// Row of `/employee_manager_details`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeManagerDetails {
    #[serde(rename = "Employee Name")]
    pub employee: String,
    #[serde(rename = "Employee Salary")]
    pub employee_salary: i64,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Manager Name")]
    pub manager: String,
    #[serde(rename = "Manager Salary")]
    pub manager_salary: i64,
    #[serde(rename = "Average Salary")]
    pub average_salary: i64,
}

/// Each employee with their department, its manager, and a
/// window-computed average salary per department, truncated to an
/// integer. Employees in a department without a manager are omitted,
/// since the view pairs every employee with a manager row.
pub fn employee_manager_details(db: &Database) -> DbResult<Vec<EmployeeManagerDetails>> {
    db.read(|conn| {
        collect(
            conn,
            "SELECT e.Fname || ' ' || e.Lname,
                    e.Salary,
                    d.Dname,
                    m.Fname || ' ' || m.Lname,
                    m.Salary,
                    CAST(AVG(e.Salary) OVER (PARTITION BY e.Dno) AS INTEGER)
             FROM Employee e
             JOIN Department d ON e.Dno = d.Dnumber
             JOIN Employee m ON d.Mgr_ssn = m.Ssn
             ORDER BY e.Ssn",
            |row| {
                Ok(EmployeeManagerDetails {
                    employee: row.get(0)?,
                    employee_salary: row.get(1)?,
                    department: row.get(2)?,
                    manager: row.get(3)?,
                    manager_salary: row.get(4)?,
                    average_salary: row.get(5)?,
                })
            },
        )
    })
}

fn collect<T>(
    conn: &Connection,
    sql: &str,
    map: impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
) -> DbResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map)?;
    Ok(rows.collect::<rusqlite::Result<Vec<T>>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_on_empty_database() {
        let db = Database::open_in_memory().unwrap();
        assert!(high_salary_departments(&db).unwrap().is_empty());
        assert!(department_details(&db).unwrap().is_empty());
        assert!(project_details(&db).unwrap().is_empty());
        assert!(busy_projects(&db).unwrap().is_empty());
        assert!(employee_manager_details(&db).unwrap().is_empty());
    }

    #[test]
    fn test_report_rows_serialize_with_labels() {
        let row = ProjectDetails {
            project: "ProductX".into(),
            department: "Research".into(),
            employees: 0,
            total_hours: 0,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["Project Name"], "ProductX");
        assert_eq!(value["Total Hours"], 0);
    }
}
