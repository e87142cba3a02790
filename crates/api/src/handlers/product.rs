//! Product operations outside the generic CRUD set.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use boxoffice_core::resource::ResourceHandler;
use boxoffice_core::types::DbId;
use boxoffice_db::models::product::ProductDto;

use crate::error::AppResult;
use crate::extract::PathParam;
use crate::middleware::auth::Caller;
use crate::resources::product::{ProductHandler, GET_BY_PRODUCT_ID};

/// GET /api/Product/GetByProductId/{id}
///
/// Always a JSON array: empty when no product has this id.
pub async fn get_by_product_id(
    State(handler): State<Arc<ProductHandler>>,
    caller: Caller,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Vec<ProductDto>>> {
    caller.authorize(handler.access(GET_BY_PRODUCT_ID))?;
    Ok(Json(handler.get_by_product_id(id).await?))
}
