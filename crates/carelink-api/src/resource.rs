//! Generic CRUD router shared by every collection.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use carelink_models::Record;
use carelink_store::JsonStore;

use crate::error::ApiResult;
use crate::state::AppState;

/// Build the CRUD router for one collection.
///
/// Each handler is a thin translation from the request to the matching store
/// call; the store owns all record semantics.
pub fn router(store: Arc<JsonStore>) -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
        .with_state(store)
}

async fn list(State(store): State<Arc<JsonStore>>) -> ApiResult<Json<Vec<Record>>> {
    Ok(Json(store.list().await?))
}

async fn get_one(
    State(store): State<Arc<JsonStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Record>> {
    Ok(Json(store.get(&id).await?))
}

async fn create(
    State(store): State<Arc<JsonStore>>,
    Json(fields): Json<Map<String, Value>>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let record = store.create(fields).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update(
    State(store): State<Arc<JsonStore>>,
    Path(id): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> ApiResult<Json<Record>> {
    Ok(Json(store.update(&id, fields).await?))
}

async fn remove(
    State(store): State<Arc<JsonStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    store.delete(&id).await?;
    Ok(Json(json!({ "message": "record deleted" })))
}
