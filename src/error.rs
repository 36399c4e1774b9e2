//! Error types returned by the session store.

use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised while reading or writing sessions.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A session, teacher or user referenced by id does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The request conflicts with the current participation state.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The session violates a column constraint and was not written.
    #[error("invalid session: {0}")]
    Validation(String),

    /// Any error reported by Sea-ORM or the database driver.
    #[error("database error: {0}")]
    Backend(#[from] DbErr),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Result alias used throughout the store.
pub type StoreResult<T> = Result<T, StoreError>;
