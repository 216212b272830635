pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod resolve;
pub mod scoring;
pub mod services;

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::error::Result;

/// Shared handle to the stats database.
///
/// Owns a bounded connection pool; repositories borrow the pool per call and
/// never hold a connection across calls or mutate session state, so any
/// number of concurrent requests can share one `Database`.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to the stats database with a bounded pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
