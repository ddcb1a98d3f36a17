use anyhow::{Context, Result};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Builds the Postgres pool. The connection cap comes from
    /// `Config::db_max_conn`; everything else uses pool defaults.
    pub async fn new_pool(
        connection_string: &str,
        max_connections: u32,
    ) -> Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(connection_string)
            .await
            .context("Failed to create database connection pool")?;

        Ok(pool)
    }
}
