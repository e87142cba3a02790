//! Generic CRUD handlers shared by every resource.
//!
//! Each handler resolves the [`Caller`], checks it against the resource's
//! access requirement for the operation, and only then reads the request
//! body, so an unauthenticated write is reported as 401 even when its body
//! is malformed.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use boxoffice_core::access::Operation;
use boxoffice_core::resource::{Resource, ResourceHandler};
use boxoffice_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::middleware::auth::Caller;

/// GET /api/{resource}
pub async fn list<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    caller: Caller,
) -> AppResult<Json<Vec<H::Dto>>> {
    caller.authorize(handler.access(Operation::List))?;
    Ok(Json(handler.list_all().await?))
}

/// GET /api/{resource}/{id}
pub async fn get_one<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    caller: Caller,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<H::Dto>> {
    caller.authorize(handler.access(Operation::Get))?;
    Ok(Json(handler.get_by_id(id).await?))
}

/// POST /api/{resource}
///
/// Returns 201 with the stored resource, including its assigned id.
pub async fn create<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    caller: Caller,
    body: Result<JsonBody<H::Dto>, AppError>,
) -> AppResult<(StatusCode, Json<H::Dto>)> {
    caller.authorize(handler.access(Operation::Create))?;
    let JsonBody(input) = body?;

    let created = handler.create(input).await?;

    tracing::info!(
        resource = H::Entity::NAME,
        user_id = ?caller.user_id(),
        "Resource created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/{resource}/{id}
pub async fn update<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    caller: Caller,
    PathParam(id): PathParam<DbId>,
    body: Result<JsonBody<H::Dto>, AppError>,
) -> AppResult<Json<H::Dto>> {
    caller.authorize(handler.access(Operation::Update))?;
    let JsonBody(input) = body?;

    let updated = handler.update(id, input).await?;

    tracing::info!(
        resource = H::Entity::NAME,
        id,
        user_id = ?caller.user_id(),
        "Resource updated",
    );

    Ok(Json(updated))
}

/// DELETE /api/{resource}/{id}
///
/// Returns 204 No Content on success.
pub async fn delete<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    caller: Caller,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    caller.authorize(handler.access(Operation::Delete))?;
    handler.delete(id).await?;

    tracing::info!(
        resource = H::Entity::NAME,
        id,
        user_id = ?caller.user_id(),
        "Resource deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
