use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::env;

/// Opens the shared connection pool from the `DATABASE_URL` environment
/// variable. Called once at process start; the pool lives for the lifetime
/// of the server.
pub async fn get_db_pool() -> Result<Pool<Sqlite>> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .with_context(|| format!("failed to connect to {db_url}"))?;

    Ok(pool)
}
