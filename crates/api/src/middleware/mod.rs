//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::Caller`] -- Resolves the caller without rejecting, for
//!   operations whose access requirement is decided per resource.

pub mod auth;
