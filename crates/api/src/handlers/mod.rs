//! Request handlers, one module per resource.

pub mod auth;
pub mod me;
pub mod salons;
pub mod shift_patterns;
pub mod shifts;
pub mod staff;
pub mod users;
