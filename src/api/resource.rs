//! Uniform CRUD endpoints generated for any [`Entity`]

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::extract::{IdPath, ValidatedJson, ValidatedQuery};
use crate::{
    error::{AppError, AppResult},
    models::Entity,
    repository::EntityStore,
    AppState,
};

const DEFAULT_LIMIT: i64 = 100;

/// Offset/limit pagination
#[derive(Debug, Default, Deserialize, Validate, IntoParams, ToSchema)]
pub struct Pagination {
    /// Records to skip (default 0)
    #[validate(range(min = 0))]
    pub skip: Option<i64>,
    /// Maximum records returned (default 100)
    #[validate(range(min = 0))]
    pub limit: Option<i64>,
}

impl Pagination {
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Body returned by a successful delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    /// Always `deleted`
    pub status: String,
    pub id: i32,
}

fn not_found() -> AppError {
    AppError::NotFound("Item not found".to_string())
}

/// The five routes of a resource, mounted under `E::PATH`.
///
/// The collection answers both with and without a trailing slash.
pub fn routes<E: Entity>() -> Router<AppState> {
    let collection = format!("{}/", E::PATH);
    let item = format!("{}/:id", E::PATH);

    Router::new()
        .route(E::PATH, get(list::<E>).post(create::<E>))
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(&item, get(read::<E>).put(update::<E>).delete(remove::<E>))
}

async fn list<E: Entity>(
    State(state): State<AppState>,
    ValidatedQuery(page): ValidatedQuery<Pagination>,
) -> AppResult<Json<Vec<E>>> {
    let mut session = state.repository.session().await?;
    let rows = EntityStore::<E>::new()
        .list(&mut session, page.skip(), page.limit())
        .await?;
    Ok(Json(rows))
}

async fn read<E: Entity>(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> AppResult<Json<E>> {
    let mut session = state.repository.session().await?;
    let row = EntityStore::<E>::new()
        .get(&mut session, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(row))
}

async fn create<E: Entity>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<E::Create>,
) -> AppResult<Json<E>> {
    let mut session = state.repository.session().await?;
    let row = EntityStore::<E>::new().create(&mut session, input).await?;
    Ok(Json(row))
}

async fn update<E: Entity>(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
    ValidatedJson(patch): ValidatedJson<E::Update>,
) -> AppResult<Json<E>> {
    let mut session = state.repository.session().await?;
    let store = EntityStore::<E>::new();
    let existing = store.get(&mut session, id).await?.ok_or_else(not_found)?;
    let row = store.update(&mut session, &existing, patch).await?;
    Ok(Json(row))
}

async fn remove<E: Entity>(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> AppResult<Json<DeleteResponse>> {
    let mut session = state.repository.session().await?;
    EntityStore::<E>::new()
        .delete(&mut session, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(DeleteResponse {
        status: "deleted".to_string(),
        id,
    }))
}
