//! Report HTTP Routes
//!
//! The five read-only aggregate views. Each returns a JSON array of
//! rows, or `{"Message", "Error"}` with a 500 if the engine fails.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::Database;
use crate::reports::{
    self, DepartmentDetails, EmployeeManagerDetails, HighSalaryDepartment, ProjectDetails,
};

use super::errors::{ApiError, ApiResult};

pub fn routes() -> Router<Arc<Database>> {
    Router::new()
        .route("/high_dept_salary", get(high_dept_salary))
        .route("/dept_details", get(dept_details))
        .route("/project_details", get(project_details))
        .route("/projects_multiple_employees", get(projects_multiple_employees))
        .route("/employee_manager_details", get(employee_manager_details))
}

async fn high_dept_salary(
    State(db): State<Arc<Database>>,
) -> ApiResult<Json<Vec<HighSalaryDepartment>>> {
    let rows = reports::high_salary_departments(&db).map_err(|e| {
        ApiError::internal(
            "Error retrieving departments with salaries greater than $30,000.",
            e,
        )
    })?;
    Ok(Json(rows))
}

async fn dept_details(State(db): State<Arc<Database>>) -> ApiResult<Json<Vec<DepartmentDetails>>> {
    let rows = reports::department_details(&db)
        .map_err(|e| ApiError::internal("Error retrieving department details.", e))?;
    Ok(Json(rows))
}

async fn project_details(State(db): State<Arc<Database>>) -> ApiResult<Json<Vec<ProjectDetails>>> {
    let rows = reports::project_details(&db)
        .map_err(|e| ApiError::internal("Error retrieving project details.", e))?;
    Ok(Json(rows))
}

async fn projects_multiple_employees(
    State(db): State<Arc<Database>>,
) -> ApiResult<Json<Vec<ProjectDetails>>> {
    let rows = reports::busy_projects(&db)
        .map_err(|e| ApiError::internal("Error retrieving projects with multiple employees.", e))?;
    Ok(Json(rows))
}

async fn employee_manager_details(
    State(db): State<Arc<Database>>,
) -> ApiResult<Json<Vec<EmployeeManagerDetails>>> {
    let rows = reports::employee_manager_details(&db)
        .map_err(|e| ApiError::internal("Error retrieving employee and manager details.", e))?;
    Ok(Json(rows))
}
