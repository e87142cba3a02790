use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::resources::ProductHandler;
use crate::routes::resource::crud_router;
use crate::state::AppState;

/// Routes mounted at `/Product`.
///
/// ```text
/// (CRUD)                   -> crud_router::<ProductHandler>
/// GET /GetByProductId/{id} -> get_by_product_id
/// ```
pub fn router() -> Router<AppState> {
    crud_router::<ProductHandler>()
        .route("/GetByProductId/{id}", get(product::get_by_product_id))
}
