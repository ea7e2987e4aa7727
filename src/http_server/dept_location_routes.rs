//! Dept_Locations HTTP Routes
//!
//! Update and delete address a row by its FULL composite key
//! (`?Dnumber=&Dlocation=`). Half a key could match several rows, so a
//! partial key is a 400, not a guess.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::db::Database;
use crate::model::{DeptLocation, DeptLocationField, DeptLocationPatch};
use crate::store;

use super::errors::{ApiError, ApiResult};
use super::query::LookupQuery;
use super::response;

pub fn routes() -> Router<Arc<Database>> {
    Router::new()
        .route("/add_dept_location", post(add_dept_location))
        .route("/get_dept_location", get(get_dept_location))
        .route("/update_dept_location", put(update_dept_location))
        .route("/delete_dept_location", delete(delete_dept_location))
}

/// Full composite key, carried as query parameters
#[derive(Debug, Deserialize)]
struct DeptLocationKey {
    #[serde(rename = "Dnumber")]
    dnumber: Option<i64>,
    #[serde(rename = "Dlocation")]
    dlocation: Option<String>,
}

impl DeptLocationKey {
    fn require(self) -> ApiResult<(i64, String)> {
        match (self.dnumber, self.dlocation) {
            (Some(dnumber), Some(dlocation)) => Ok((dnumber, dlocation)),
            _ => Err(ApiError::MissingParam(
                "Both Dnumber and Dlocation are required.",
            )),
        }
    }
}

async fn add_dept_location(
    State(db): State<Arc<Database>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let loc: DeptLocation =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::dept_location::insert(&db, &loc)
        .map_err(|e| ApiError::from_db(e, "Department location", "Error adding row."))?;
    Ok(response::record(
        "Department location added successfully!",
        "Department Location",
        &loc,
    ))
}

async fn get_dept_location(
    State(db): State<Arc<Database>>,
    Query(params): Query<LookupQuery>,
) -> ApiResult<Json<Value>> {
    let (key, value) = params.require()?;
    let field = DeptLocationField::parse(&key).ok_or(ApiError::InvalidKey)?;
    let value = field.kind().coerce(&value)?;
    let loc = store::dept_location::find_by_field(&db, field, &value).map_err(|e| {
        ApiError::from_db(e, "Department location", "Error fetching department location.")
    })?;
    Ok(response::record(
        "Retrieved department location's records!",
        "Department Location",
        &loc,
    ))
}

async fn update_dept_location(
    State(db): State<Arc<Database>>,
    Query(key): Query<DeptLocationKey>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let (dnumber, dlocation) = key.require()?;
    let patch: DeptLocationPatch =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::dept_location::update(&db, dnumber, &dlocation, &patch).map_err(|e| {
        ApiError::from_db(e, "Department location", "Error updating department location.")
    })?;
    Ok(response::message("Department location updated successfully!"))
}

async fn delete_dept_location(
    State(db): State<Arc<Database>>,
    Query(key): Query<DeptLocationKey>,
) -> ApiResult<Json<Value>> {
    let (dnumber, dlocation) = key.require()?;
    store::dept_location::delete(&db, dnumber, &dlocation).map_err(|e| {
        ApiError::from_db(e, "Department location", "Error deleting department location.")
    })?;
    Ok(response::message("Department location deleted successfully!"))
}
