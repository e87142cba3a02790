use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::resources::MovieHandler;
use crate::routes::resource::crud_router;
use crate::state::AppState;

/// Routes mounted at `/Movie`.
///
/// ```text
/// (CRUD)        -> crud_router::<MovieHandler>
/// GET /Active   -> list_active
/// GET /Featured -> list_featured
/// ```
///
/// The static segments take precedence over `/{id}`.
pub fn router() -> Router<AppState> {
    crud_router::<MovieHandler>()
        .route("/Active", get(movie::list_active))
        .route("/Featured", get(movie::list_featured))
}
