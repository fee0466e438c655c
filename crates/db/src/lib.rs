//! PostgreSQL persistence for the restaurant site.
//!
//! - [`models`] -- row structs, request DTOs and conversions into core types
//! - [`repositories`] -- zero-sized repositories with async CRUD methods
//! - [`source`] -- [`source::PgContentSource`], the database-backed content source
//! - [`import`] -- import of a legacy content export (`lokanta-import` binary)

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod import;
pub mod models;
pub mod repositories;
pub mod source;

pub type DbPool = sqlx::PgPool;

/// Maximum pool size.
const MAX_CONNECTIONS: u32 = 20;

/// How long a request waits for a free connection before giving up.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
