//! Generic CRUD route set.

use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use boxoffice_core::resource::ResourceHandler;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::handlers::resource;
use crate::state::AppState;

/// CRUD routes for resource handler `H`, to be nested at `/{resource}`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_one
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn crud_router<H>() -> Router<AppState>
where
    H: ResourceHandler,
    H::Dto: Serialize + DeserializeOwned,
    Arc<H>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(resource::list::<H>).post(resource::create::<H>))
        .route(
            "/{id}",
            get(resource::get_one::<H>)
                .put(resource::update::<H>)
                .delete(resource::delete::<H>),
        )
}
