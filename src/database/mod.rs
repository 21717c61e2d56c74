pub mod pool;
pub mod schema;

use thiserror::Error;

/// Errors from the record store
#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
