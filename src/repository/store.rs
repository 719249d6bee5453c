//! Generic entity store shared by every resource

use std::marker::PhantomData;

use sqlx::PgConnection;

use super::sql;
use crate::{
    error::AppResult,
    models::{Entity, IntoColumns},
};

/// CRUD access to the table behind `E`.
///
/// The store holds no connection of its own: every call runs on the session
/// handed in by the caller and commits immediately. Missing rows come back as
/// `None`; constraint violations surface as `sqlx` errors untouched.
pub struct EntityStore<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> Default for EntityStore<E> {
    fn default() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> EntityStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a record by ID
    pub async fn get(&self, conn: &mut PgConnection, id: i32) -> AppResult<Option<E>> {
        let query = sql::select_by_id(E::TABLE);
        let row = sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    /// List records in id order
    pub async fn list(&self, conn: &mut PgConnection, skip: i64, limit: i64) -> AppResult<Vec<E>> {
        let query = sql::select_page(E::TABLE);
        let rows = sqlx::query_as::<_, E>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// Insert a record; columns left out of the input take their storage default
    pub async fn create(&self, conn: &mut PgConnection, input: E::Create) -> AppResult<E> {
        let columns = input.into_columns();
        let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        let query = sql::insert(E::TABLE, &names);

        let mut builder = sqlx::query_as::<_, E>(&query);
        for (_, value) in columns {
            builder = value.bind(builder);
        }

        let row = builder.fetch_one(conn).await?;
        tracing::debug!(table = E::TABLE, id = row.id(), "created");
        Ok(row)
    }

    /// Apply the fields present in `patch` onto `existing`
    pub async fn update(&self, conn: &mut PgConnection, existing: &E, patch: E::Update) -> AppResult<E> {
        let id = existing.id();
        let columns = patch.into_columns();

        if columns.is_empty() {
            let query = sql::select_by_id(E::TABLE);
            let row = sqlx::query_as::<_, E>(&query).bind(id).fetch_one(conn).await?;
            return Ok(row);
        }

        let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        let query = sql::update(E::TABLE, &names);

        let mut builder = sqlx::query_as::<_, E>(&query);
        for (_, value) in columns {
            builder = value.bind(builder);
        }

        let row = builder.bind(id).fetch_one(conn).await?;
        tracing::debug!(table = E::TABLE, id, fields = ?names, "updated");
        Ok(row)
    }

    /// Delete a record, returning its last state
    pub async fn delete(&self, conn: &mut PgConnection, id: i32) -> AppResult<Option<E>> {
        let query = sql::delete(E::TABLE);
        let row = sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        if row.is_some() {
            tracing::debug!(table = E::TABLE, id, "deleted");
        }
        Ok(row)
    }
}
