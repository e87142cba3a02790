//! Mapping of `sqlx` failures onto the domain error taxonomy.

use boxoffice_core::error::CoreError;

/// PostgreSQL `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Convert `sqlx::Error` into [`CoreError`].
///
/// Orphan rules forbid `From<sqlx::Error> for CoreError` here, so stores call
/// `.map_err(SqlxErrorExt::into_core_error)` instead.
pub trait SqlxErrorExt {
    fn into_core_error(self) -> CoreError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_core_error(self) -> CoreError {
        match &self {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => {
                tracing::warn!(error = %self, "Store unavailable");
                CoreError::StoreUnavailable(self.to_string())
            }
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => CoreError::Validation(format!(
                    "Violates foreign key constraint: {}",
                    db_err.constraint().unwrap_or("foreign key")
                )),
                Some(UNIQUE_VIOLATION) => CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {}",
                    db_err.constraint().unwrap_or("unknown")
                )),
                _ => CoreError::Internal(db_err.to_string()),
            },
            other => CoreError::Internal(other.to_string()),
        }
    }
}
