use std::sync::Arc;

use axum::extract::FromRef;
use boxoffice_db::repositories::{MovieRepo, ProductRepo, ProductTypeRepo};
use boxoffice_db::DbPool;

use crate::config::ServerConfig;
use crate::resources::{MovieHandler, ProductHandler, ProductTypeHandler};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Resource handlers are also reachable directly as `State<Arc<H>>`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
    pub products: Arc<ProductHandler>,
    pub product_types: Arc<ProductTypeHandler>,
    pub movies: Arc<MovieHandler>,
}

impl AppState {
    /// Wire every resource handler to its repository over `pool`.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            products: Arc::new(ProductHandler::new(ProductRepo::new(pool.clone()))),
            product_types: Arc::new(ProductTypeHandler::new(ProductTypeRepo::new(pool.clone()))),
            movies: Arc::new(MovieHandler::new(MovieRepo::new(pool.clone()))),
            config: Arc::new(config),
            pool,
        }
    }
}

impl FromRef<AppState> for Arc<ProductHandler> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.products)
    }
}

impl FromRef<AppState> for Arc<ProductTypeHandler> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.product_types)
    }
}

impl FromRef<AppState> for Arc<MovieHandler> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.movies)
    }
}
