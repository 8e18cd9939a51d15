//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- JWT access-token generation, validation, and refresh-token helpers.

pub mod password;
pub mod token;
