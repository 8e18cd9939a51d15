//! Use-case services sitting between handlers and repositories.
//!
//! Handlers stay thin: they parse the request, hand the resolved scope to
//! a service, and serialize the result. Services own the permission
//! checks, ownership checks, and repository orchestration.

pub mod scheduling;
