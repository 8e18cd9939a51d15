//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus `Deserialize` create/update DTOs
//! where the entity is written through the API.

pub mod appointment;
pub mod salon;
pub mod session;
pub mod shift;
pub mod shift_pattern;
pub mod staff;
pub mod tenant;
pub mod user;
