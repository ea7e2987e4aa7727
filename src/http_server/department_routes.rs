//! Department HTTP Routes

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::db::Database;
use crate::model::{Department, DepartmentField, DepartmentPatch};
use crate::store;

use super::errors::{ApiError, ApiResult};
use super::query::LookupQuery;
use super::response;

pub fn routes() -> Router<Arc<Database>> {
    Router::new()
        .route("/add_department", post(add_department))
        .route("/get_department", get(get_department))
        .route("/update_department/:dnumber", put(update_department))
        .route("/delete_department/:dnumber", delete(delete_department))
}

async fn add_department(
    State(db): State<Arc<Database>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let dept: Department =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::department::insert(&db, &dept)
        .map_err(|e| ApiError::from_db(e, "Department", "Error adding row."))?;
    Ok(response::record(
        "Department record added successfully!",
        "Department",
        &dept,
    ))
}

async fn get_department(
    State(db): State<Arc<Database>>,
    Query(params): Query<LookupQuery>,
) -> ApiResult<Json<Value>> {
    let (key, value) = params.require()?;
    let field = DepartmentField::parse(&key).ok_or(ApiError::InvalidKey)?;
    let value = field.kind().coerce(&value)?;
    let dept = store::department::find_by_field(&db, field, &value)
        .map_err(|e| ApiError::from_db(e, "Department", "Error fetching department."))?;
    Ok(response::record(
        "Retrieved department records!",
        "Department",
        &dept,
    ))
}

async fn update_department(
    State(db): State<Arc<Database>>,
    Path(dnumber): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let patch: DepartmentPatch =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::department::update(&db, dnumber, &patch)
        .map_err(|e| ApiError::from_db(e, "Department", "Error updating department."))?;
    Ok(response::message("Department record updated successfully!"))
}

async fn delete_department(
    State(db): State<Arc<Database>>,
    Path(dnumber): Path<i64>,
) -> ApiResult<Json<Value>> {
    store::department::delete(&db, dnumber)
        .map_err(|e| ApiError::from_db(e, "Department", "Error deleting department."))?;
    Ok(response::message("Department record deleted successfully!"))
}
