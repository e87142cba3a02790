use axum::Router;

use crate::resources::ProductTypeHandler;
use crate::routes::resource::crud_router;
use crate::state::AppState;

/// Routes mounted at `/ProductType`.
pub fn router() -> Router<AppState> {
    crud_router::<ProductTypeHandler>()
}
