//! Works_On HTTP Routes
//!
//! Update and delete address an assignment by its FULL composite key
//! (`?Essn=&Pno=`); a partial key is a 400.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::db::Database;
use crate::model::{WorksOn, WorksOnField, WorksOnPatch};
use crate::store;

use super::errors::{ApiError, ApiResult};
use super::query::LookupQuery;
use super::response;

pub fn routes() -> Router<Arc<Database>> {
    Router::new()
        .route("/add_works_on", post(add_works_on))
        .route("/get_works_on", get(get_works_on))
        .route("/update_works_on", put(update_works_on))
        .route("/delete_works_on", delete(delete_works_on))
}

/// Full composite key, carried as query parameters
#[derive(Debug, Deserialize)]
struct WorksOnKey {
    #[serde(rename = "Essn")]
    essn: Option<i64>,
    #[serde(rename = "Pno")]
    pno: Option<i64>,
}

impl WorksOnKey {
    fn require(self) -> ApiResult<(i64, i64)> {
        match (self.essn, self.pno) {
            (Some(essn), Some(pno)) => Ok((essn, pno)),
            _ => Err(ApiError::MissingParam("Both Essn and Pno are required.")),
        }
    }
}

async fn add_works_on(
    State(db): State<Arc<Database>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let assignment: WorksOn =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::works_on::insert(&db, &assignment)
        .map_err(|e| ApiError::from_db(e, "'Working on' record", "Error adding row."))?;
    Ok(response::record(
        "'Working on' record added successfully!",
        "Working On",
        &assignment,
    ))
}

async fn get_works_on(
    State(db): State<Arc<Database>>,
    Query(params): Query<LookupQuery>,
) -> ApiResult<Json<Value>> {
    let (key, value) = params.require()?;
    let field = WorksOnField::parse(&key).ok_or(ApiError::InvalidKey)?;
    let value = field.kind().coerce(&value)?;
    let assignment = store::works_on::find_by_field(&db, field, &value).map_err(|e| {
        ApiError::from_db(e, "'Working on' record", "Error fetching 'working on' record.")
    })?;
    Ok(response::record(
        "Retrieved 'working on' records!",
        "Working On",
        &assignment,
    ))
}

async fn update_works_on(
    State(db): State<Arc<Database>>,
    Query(key): Query<WorksOnKey>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let (essn, pno) = key.require()?;
    let patch: WorksOnPatch =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::works_on::update(&db, essn, pno, &patch).map_err(|e| {
        ApiError::from_db(e, "'Working on' record", "Error updating 'working on' record.")
    })?;
    Ok(response::message("'Working on' record updated successfully!"))
}

async fn delete_works_on(
    State(db): State<Arc<Database>>,
    Query(key): Query<WorksOnKey>,
) -> ApiResult<Json<Value>> {
    let (essn, pno) = key.require()?;
    store::works_on::delete(&db, essn, pno).map_err(|e| {
        ApiError::from_db(e, "'Working on' record", "Error deleting 'working on' record.")
    })?;
    Ok(response::message("'Working on' record deleted successfully!"))
}
