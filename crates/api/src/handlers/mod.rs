pub mod auth;
pub mod movie;
pub mod product;
pub mod resource;
