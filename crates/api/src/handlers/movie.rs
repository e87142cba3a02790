//! Movie listings for the public site.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use boxoffice_core::resource::ResourceHandler;
use boxoffice_db::models::movie::{CarouselSlide, MovieSummaryDto};

use crate::error::AppResult;
use crate::middleware::auth::Caller;
use crate::resources::movie::{MovieHandler, ACTIVE, FEATURED};

/// GET /api/Movie/Active
pub async fn list_active(
    State(handler): State<Arc<MovieHandler>>,
    caller: Caller,
) -> AppResult<Json<Vec<MovieSummaryDto>>> {
    caller.authorize(handler.access(ACTIVE))?;
    Ok(Json(handler.list_active().await?))
}

/// GET /api/Movie/Featured
///
/// Carousel slides for the landing page. Movies without a banner are left out.
pub async fn list_featured(
    State(handler): State<Arc<MovieHandler>>,
    caller: Caller,
) -> AppResult<Json<Vec<CarouselSlide>>> {
    caller.authorize(handler.access(FEATURED))?;
    Ok(Json(handler.list_featured().await?))
}
