//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use boxoffice_core::access::{authorize, Access, Principal};
use boxoffice_core::error::CoreError;
use boxoffice_core::types::{DbId, Timestamp};
use boxoffice_db::repositories::RevokedTokenRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that always requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (`"admin"` or `"user"`).
    pub role: String,
    /// Token identifier, used to revoke this token on logout.
    pub jti: String,
    /// When the presented token expires.
    pub expires_at: Timestamp,
}

impl AuthUser {
    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.user_id,
            role: self.role.clone(),
        }
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        if RevokedTokenRepo::is_revoked(&state.pool, &claims.jti).await? {
            return Err(unauthorized("Token has been revoked"));
        }

        Ok(AuthUser {
            user_id: claims.sub,
            expires_at: claims.expires_at(),
            role: claims.role,
            jti: claims.jti,
        })
    }
}

/// The caller of a resource operation, authenticated or not.
///
/// Unlike [`AuthUser`], extraction never rejects on bad credentials: the
/// outcome is kept so operations that allow anonymous access still succeed
/// when a client sends a stale token.
#[derive(Debug, Clone)]
pub enum Caller {
    Anonymous,
    Authenticated(AuthUser),
    /// Credentials were presented but rejected, with the reason.
    Rejected(String),
}

impl Caller {
    /// Check this caller against `access`.
    pub fn authorize(&self, access: Access) -> Result<(), CoreError> {
        match self {
            Caller::Rejected(reason) if access != Access::Anonymous => {
                Err(CoreError::Unauthorized(reason.clone()))
            }
            Caller::Authenticated(user) => authorize(access, Some(&user.principal())),
            Caller::Anonymous | Caller::Rejected(_) => authorize(access, None),
        }
    }

    pub fn user_id(&self) -> Option<DbId> {
        match self {
            Caller::Authenticated(user) => Some(user.user_id),
            _ => None,
        }
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(Caller::Anonymous);
        }
        match AuthUser::from_request_parts(parts, state).await {
            Ok(user) => Ok(Caller::Authenticated(user)),
            Err(AppError::Core(CoreError::Unauthorized(reason))) => Ok(Caller::Rejected(reason)),
            Err(other) => Err(other),
        }
    }
}
