pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use shala_core::errors::ShalaError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

pub(crate) fn db_err(err: sqlx::Error) -> ShalaError {
    ShalaError::Database(err.into())
}
