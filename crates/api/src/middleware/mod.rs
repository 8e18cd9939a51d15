//! Authentication and scope-resolution middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`scope::Scoped`] -- Resolves the full tenant/salon scope for the request,
//!   honoring an optional `X-Salon-Id` header.

pub mod auth;
pub mod scope;
