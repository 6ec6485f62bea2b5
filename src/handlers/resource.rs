//! Generic CRUD endpoint set, instantiated once per resource type.
//!
//! Every handler calls the access policy before touching request parameters or
//! storage, so callers without the required role always see 403, even for ids
//! that do not exist.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::{AccessPolicy, Caller};
use crate::database::Repository;
use crate::error::{ApiError, ApiResult};
use crate::resources::Resource;
use crate::types::Operation;

/// Repository and policy for one resource type
pub struct ResourceState<R: Resource> {
    pub repo: Arc<dyn Repository<R>>,
    pub policy: Arc<AccessPolicy>,
}

impl<R: Resource> ResourceState<R> {
    pub fn new(repo: Arc<dyn Repository<R>>, policy: Arc<AccessPolicy>) -> Self {
        Self { repo, policy }
    }

    fn authorize(&self, caller: &Caller, operation: Operation) -> ApiResult<()> {
        self.policy.authorize(caller, R::PATH, operation)
    }
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            policy: Arc::clone(&self.policy),
        }
    }
}

/// `?id=` query parameter
#[derive(Debug, Deserialize)]
pub struct IdQuery<I> {
    pub id: I,
}

/// Plain `{"message": ...}` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub message: String,
}

fn query_param<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// GET /api/<path>/all
pub async fn list<R: Resource>(
    State(state): State<ResourceState<R>>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<Json<Vec<R>>> {
    state.authorize(&caller, Operation::List)?;

    let records = state.repo.find_all().await?;
    debug!(resource = R::PATH, count = records.len(), "Listed records");
    Ok(Json(records))
}

/// POST /api/<path>/post?field=value&...
pub async fn create<R: Resource>(
    State(state): State<ResourceState<R>>,
    Extension(caller): Extension<Caller>,
    params: Result<Query<R::CreateParams>, QueryRejection>,
) -> ApiResult<Json<R>> {
    state.authorize(&caller, Operation::Create)?;
    let params = query_param(params)?;

    let saved = state.repo.save(R::from_params(params)).await?;
    info!(
        resource = R::PATH,
        id = %saved.id().map(|id| id.to_string()).unwrap_or_default(),
        caller = caller.label(),
        "Created record"
    );
    Ok(Json(saved))
}

/// GET /api/<path>?id=
pub async fn get_one<R: Resource>(
    State(state): State<ResourceState<R>>,
    Extension(caller): Extension<Caller>,
    query: Result<Query<IdQuery<R::Id>>, QueryRejection>,
) -> ApiResult<Json<R>> {
    state.authorize(&caller, Operation::Get)?;
    let IdQuery { id } = query_param(query)?;

    let record = state
        .repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(R::NAME, &id))?;
    debug!(resource = R::PATH, id = %id, "Fetched record");
    Ok(Json(record))
}

/// PUT /api/<path>?id= with the replacement record as JSON body.
/// The stored key is kept regardless of any key in the body.
pub async fn update<R: Resource>(
    State(state): State<ResourceState<R>>,
    Extension(caller): Extension<Caller>,
    query: Result<Query<IdQuery<R::Id>>, QueryRejection>,
    body: Result<Json<R>, JsonRejection>,
) -> ApiResult<Json<R>> {
    state.authorize(&caller, Operation::Update)?;
    let IdQuery { id } = query_param(query)?;
    let Json(incoming) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let mut record = state
        .repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(R::NAME, &id))?;
    record.overwrite_from(incoming);
    record.set_id(id.clone());

    // The row may have been deleted since the lookup
    let saved = state
        .repo
        .update(&record)
        .await?
        .ok_or_else(|| ApiError::not_found(R::NAME, &id))?;

    info!(resource = R::PATH, id = %id, caller = caller.label(), "Updated record");
    Ok(Json(saved))
}

/// DELETE /api/<path>?id=
pub async fn delete<R: Resource>(
    State(state): State<ResourceState<R>>,
    Extension(caller): Extension<Caller>,
    query: Result<Query<IdQuery<R::Id>>, QueryRejection>,
) -> ApiResult<Json<GenericMessage>> {
    state.authorize(&caller, Operation::Delete)?;
    let IdQuery { id } = query_param(query)?;

    if !state.repo.delete(&id).await? {
        return Err(ApiError::not_found(R::NAME, &id));
    }

    info!(resource = R::PATH, id = %id, caller = caller.label(), "Deleted record");
    Ok(Json(GenericMessage {
        message: format!("{} with id {} deleted", R::DELETED_NAME, id),
    }))
}
