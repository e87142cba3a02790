//! Framework-agnostic building blocks for the box office API.
//!
//! - [`resource`] -- the generic resource controller contract.
//! - [`access`] -- per-operation access requirements.
//! - [`error`] -- the domain error taxonomy.

pub mod access;
pub mod error;
pub mod resource;
pub mod roles;
pub mod types;
