//! Employee HTTP Routes
//!
//! `POST /add_employee`, `GET /get_employee?key=&value=`,
//! `PUT /update_employee/:ssn`, `DELETE /delete_employee/:ssn`.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::db::Database;
use crate::model::{Employee, EmployeeField, EmployeePatch};
use crate::store;

use super::errors::{ApiError, ApiResult};
use super::query::LookupQuery;
use super::response;

pub fn routes() -> Router<Arc<Database>> {
    Router::new()
        .route("/add_employee", post(add_employee))
        .route("/get_employee", get(get_employee))
        .route("/update_employee/:ssn", put(update_employee))
        .route("/delete_employee/:ssn", delete(delete_employee))
}

async fn add_employee(
    State(db): State<Arc<Database>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let emp: Employee =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::employee::insert(&db, &emp)
        .map_err(|e| ApiError::from_db(e, "Employee", "Error adding row."))?;
    Ok(response::record(
        "Employee record added successfully!",
        "Employee",
        &emp,
    ))
}

async fn get_employee(
    State(db): State<Arc<Database>>,
    Query(params): Query<LookupQuery>,
) -> ApiResult<Json<Value>> {
    let (key, value) = params.require()?;
    let field = EmployeeField::parse(&key).ok_or(ApiError::InvalidKey)?;
    let value = field.kind().coerce(&value)?;
    let emp = store::employee::find_by_field(&db, field, &value)
        .map_err(|e| ApiError::from_db(e, "Employee", "Error fetching employee."))?;
    Ok(response::record(
        "Retrieved employee records!",
        "Employee",
        &emp,
    ))
}

async fn update_employee(
    State(db): State<Arc<Database>>,
    Path(ssn): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let patch: EmployeePatch =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::employee::update(&db, ssn, &patch)
        .map_err(|e| ApiError::from_db(e, "Employee", "Error updating employee."))?;
    Ok(response::message("Employee record updated successfully!"))
}

async fn delete_employee(
    State(db): State<Arc<Database>>,
    Path(ssn): Path<i64>,
) -> ApiResult<Json<Value>> {
    store::employee::delete(&db, ssn)
        .map_err(|e| ApiError::from_db(e, "Employee", "Error deleting employee."))?;
    Ok(response::message("Employee record deleted successfully!"))
}
