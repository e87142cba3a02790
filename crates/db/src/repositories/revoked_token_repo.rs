//! Repository for the `revoked_tokens` table.
//!
//! Logged-out access tokens are recorded by `jti` until they would have
//! expired anyway.

use boxoffice_core::types::{DbId, Timestamp};
use sqlx::PgPool;

pub struct RevokedTokenRepo;

impl RevokedTokenRepo {
    /// Record `jti` as revoked. Revoking the same token twice is a no-op.
    pub async fn revoke(
        pool: &PgPool,
        jti: &str,
        user_id: DbId,
        expires_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO revoked_tokens (jti, user_id, expires_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (jti) DO NOTHING",
        )
        .bind(jti)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Whether `jti` has been revoked.
    pub async fn is_revoked(pool: &PgPool, jti: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE jti = $1)")
                .bind(jti)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Delete entries whose token has expired. Returns the number removed.
    pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
