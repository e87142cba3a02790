//! Handlers for the `/authentication` resource (login, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use boxoffice_core::error::CoreError;
use boxoffice_db::models::user::UserInfo;
use boxoffice_db::repositories::{RevokedTokenRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /authentication/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/authentication/login
///
/// Authenticate with username + password. Unknown users and wrong passwords
/// get the same 401.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(username = %input.username, "Rejected login attempt");
        return Err(invalid_credentials());
    }

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo::from(&user),
    }))
}

/// POST /api/authentication/logout
///
/// Revoke the presented access token. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    RevokedTokenRepo::revoke(
        &state.pool,
        &auth_user.jti,
        auth_user.user_id,
        auth_user.expires_at,
    )
    .await?;

    tracing::info!(user_id = auth_user.user_id, "User logged out");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/authentication/me
///
/// The user the presented token belongs to.
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserInfo::from(&user)))
}
