use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use super::setup::init_database;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Pool over a database file, with the schema in place
pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let pool = build_pool(SqliteConnectionManager::file(database_path), 8)
        .with_context(|| format!("Failed to open squad database at {}", database_path))?;
    prepare(&pool)?;
    Ok(pool)
}

/// Single-connection pool over a private in-memory database.
///
/// Every pooled connection to `:memory:` would see its own empty database,
/// so the pool is capped at one connection.
pub fn create_memory_pool() -> Result<DbPool> {
    let pool = build_pool(SqliteConnectionManager::memory(), 1)?;
    prepare(&pool)?;
    Ok(pool)
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .context("Failed to create database connection pool")
}

fn prepare(pool: &DbPool) -> Result<()> {
    let mut conn = get_connection(pool)?;
    init_database(&mut conn)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
