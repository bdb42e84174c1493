pub mod appointments;
mod error;

pub use self::error::StoreError;

use anyhow::Context;
use diesel::r2d2::ConnectionManager;
use r2d2::PooledConnection;

#[cfg(not(test))]
pub type DbConnection = diesel::MysqlConnection;
#[cfg(test)]
pub type DbConnection = diesel::SqliteConnection;

pub type DbPool = r2d2::Pool<ConnectionManager<DbConnection>>;

pub fn build_pool(conn_url: &str, max_size: Option<u32>) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<DbConnection>::new(conn_url);
    let mut builder = r2d2::Pool::builder();
    if let Some(max_size) = max_size {
        builder = builder.max_size(max_size);
    }
    builder.build(manager).context("Failed to create pool")
}

pub fn get_db_conn(
    pool: &DbPool,
) -> Result<PooledConnection<ConnectionManager<DbConnection>>, StoreError> {
    pool.get().map_err(StoreError::from)
}
