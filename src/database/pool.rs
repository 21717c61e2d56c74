use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::{schema, DbError};

/// Open (creating if missing) the file-backed store and initialize its
/// schema. WAL keeps reads concurrent while the single writer (reseed)
/// proceeds.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    schema::init(&pool).await?;

    info!("opened record store at {}", config.path);
    Ok(pool)
}

/// Pings the store to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
