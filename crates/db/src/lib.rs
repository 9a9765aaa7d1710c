//! Postgres layer: pool helpers, embedded migrations, row models,
//! repositories, and the [`store::PgContentStore`] implementation of the
//! core content-store trait.

pub mod models;
pub mod repositories;
pub mod store;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared connection pool type.
pub type DbPool = PgPool;

/// Default maximum number of pooled connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify database connectivity with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
