//! Repository layer for database operations

pub mod sql;
pub mod store;

use sqlx::{pool::PoolConnection, Pool, Postgres};

use crate::error::AppResult;

pub use store::EntityStore;

/// A pooled connection held for the duration of one request.
///
/// Dropping it hands the connection back to the pool, whatever the outcome.
pub type Session = PoolConnection<Postgres>;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Acquire a scoped session for one request
    pub async fn session(&self) -> AppResult<Session> {
        Ok(self.pool.acquire().await?)
    }

    /// Round-trip to the database (readiness probe)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
