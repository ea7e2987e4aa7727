//! Dependent HTTP Routes
//!
//! Update and delete address a row by its FULL composite key
//! (`?Essn=&Dependent_name=`); a partial key is a 400.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::db::Database;
use crate::model::{Dependent, DependentField, DependentPatch};
use crate::store;

use super::errors::{ApiError, ApiResult};
use super::query::LookupQuery;
use super::response;

pub fn routes() -> Router<Arc<Database>> {
    Router::new()
        .route("/add_dependent", post(add_dependent))
        .route("/get_dependent", get(get_dependent))
        .route("/update_dependent", put(update_dependent))
        .route("/delete_dependent", delete(delete_dependent))
}

/// Full composite key, carried as query parameters
#[derive(Debug, Deserialize)]
struct DependentKey {
    #[serde(rename = "Essn")]
    essn: Option<i64>,
    #[serde(rename = "Dependent_name")]
    dependent_name: Option<String>,
}

impl DependentKey {
    fn require(self) -> ApiResult<(i64, String)> {
        match (self.essn, self.dependent_name) {
            (Some(essn), Some(name)) => Ok((essn, name)),
            _ => Err(ApiError::MissingParam(
                "Both Essn and Dependent_name are required.",
            )),
        }
    }
}

async fn add_dependent(
    State(db): State<Arc<Database>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let dep: Dependent =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::dependent::insert(&db, &dep)
        .map_err(|e| ApiError::from_db(e, "Dependent record", "Error adding row."))?;
    Ok(response::record(
        "Dependent record added successfully!",
        "Dependent",
        &dep,
    ))
}

async fn get_dependent(
    State(db): State<Arc<Database>>,
    Query(params): Query<LookupQuery>,
) -> ApiResult<Json<Value>> {
    let (key, value) = params.require()?;
    let field = DependentField::parse(&key).ok_or(ApiError::InvalidKey)?;
    let value = field.kind().coerce(&value)?;
    let dep = store::dependent::find_by_field(&db, field, &value)
        .map_err(|e| ApiError::from_db(e, "Dependent record", "Error fetching dependent record."))?;
    Ok(response::record(
        "Retrieved dependent records!",
        "Dependent",
        &dep,
    ))
}

async fn update_dependent(
    State(db): State<Arc<Database>>,
    Query(key): Query<DependentKey>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let (essn, name) = key.require()?;
    let patch: DependentPatch =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::dependent::update(&db, essn, &name, &patch)
        .map_err(|e| ApiError::from_db(e, "Dependent record", "Error updating dependent."))?;
    Ok(response::message("Dependent updated successfully!"))
}

async fn delete_dependent(
    State(db): State<Arc<Database>>,
    Query(key): Query<DependentKey>,
) -> ApiResult<Json<Value>> {
    let (essn, name) = key.require()?;
    store::dependent::delete(&db, essn, &name)
        .map_err(|e| ApiError::from_db(e, "Dependent record", "Error deleting dependent record."))?;
    Ok(response::message("Dependent record deleted successfully!"))
}
