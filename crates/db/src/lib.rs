use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod repositories;
pub mod statements;

pub type DbPool = sqlx::PgPool;

/// Summary tables use BIGSERIAL primary keys.
pub type DbId = i64;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
