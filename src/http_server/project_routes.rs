//! Project HTTP Routes

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::db::Database;
use crate::model::{Project, ProjectField, ProjectPatch};
use crate::store;

use super::errors::{ApiError, ApiResult};
use super::query::LookupQuery;
use super::response;

pub fn routes() -> Router<Arc<Database>> {
    Router::new()
        .route("/add_project", post(add_project))
        .route("/get_project", get(get_project))
        .route("/update_project/:pnumber", put(update_project))
        .route("/delete_project/:pnumber", delete(delete_project))
}

async fn add_project(
    State(db): State<Arc<Database>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let project: Project =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::project::insert(&db, &project)
        .map_err(|e| ApiError::from_db(e, "Project", "Error adding row."))?;
    Ok(response::record(
        "Project record added successfully!",
        "Project",
        &project,
    ))
}

async fn get_project(
    State(db): State<Arc<Database>>,
    Query(params): Query<LookupQuery>,
) -> ApiResult<Json<Value>> {
    let (key, value) = params.require()?;
    let field = ProjectField::parse(&key).ok_or(ApiError::InvalidKey)?;
    let value = field.kind().coerce(&value)?;
    let project = store::project::find_by_field(&db, field, &value)
        .map_err(|e| ApiError::from_db(e, "Project", "Error fetching project."))?;
    Ok(response::record(
        "Retrieved project records!",
        "Project",
        &project,
    ))
}

async fn update_project(
    State(db): State<Arc<Database>>,
    Path(pnumber): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let patch: ProjectPatch =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    store::project::update(&db, pnumber, &patch)
        .map_err(|e| ApiError::from_db(e, "Project", "Error updating project."))?;
    Ok(response::message("Project record updated successfully!"))
}

async fn delete_project(
    State(db): State<Arc<Database>>,
    Path(pnumber): Path<i64>,
) -> ApiResult<Json<Value>> {
    store::project::delete(&db, pnumber)
        .map_err(|e| ApiError::from_db(e, "Project", "Error deleting project."))?;
    Ok(response::message("Project record deleted successfully!"))
}
