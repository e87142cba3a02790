//! Startup provisioning of the first admin account.

use boxoffice_core::roles::ROLE_ADMIN;
use boxoffice_db::models::user::CreateUser;
use boxoffice_db::repositories::UserRepo;
use boxoffice_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::BootstrapAdmin;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("bootstrap admin password rejected: {0}")]
    WeakPassword(String),

    #[error("failed to hash bootstrap admin password: {0}")]
    Hash(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Create the configured admin account unless a user with that name exists.
///
/// Returns `true` when a new account was created. An existing user is left
/// untouched, whatever its role.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> Result<bool, BootstrapError> {
    if UserRepo::find_by_username(pool, &admin.username).await?.is_some() {
        tracing::debug!(username = %admin.username, "Bootstrap admin already exists");
        return Ok(false);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(BootstrapError::WeakPassword)?;
    let password_hash =
        hash_password(&admin.password).map_err(|e| BootstrapError::Hash(e.to_string()))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(true)
}
