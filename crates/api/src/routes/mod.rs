pub mod auth;
pub mod health;
pub mod movie;
pub mod product;
pub mod product_type;
pub mod resource;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /authentication/login                            login (public)
/// /authentication/logout                           logout (requires auth)
/// /authentication/me                               current user (requires auth)
///
/// /Product                                         list (public), create
/// /Product/{id}                                    get, update, delete
/// /Product/GetByProductId/{id}                     lookup as array (public)
///
/// /ProductType                                     list (public), create (admin)
/// /ProductType/{id}                                get (public), update, delete (admin)
///
/// /Movie                                           list (public), create
/// /Movie/{id}                                      get (public), update, delete
/// /Movie/Active                                    active summaries (public)
/// /Movie/Featured                                  carousel slides (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/authentication", auth::router())
        .nest("/Product", product::router())
        .nest("/ProductType", product_type::router())
        .nest("/Movie", movie::router())
}
