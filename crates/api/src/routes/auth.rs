//! Route definitions for the `/authentication` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/authentication`.
///
/// ```text
/// POST /login   -> login
/// POST /logout  -> logout (requires auth)
/// GET  /me      -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}
