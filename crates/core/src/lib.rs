//! Salonflow domain core.
//!
//! Pure domain logic shared by the repository and API layers: the error
//! taxonomy, role/permission rules, scope resolution, and the recurring
//! shift expansion planner. This crate has zero internal deps and does no
//! I/O, so every invariant in it is unit-testable without a database.

pub mod error;
pub mod expansion;
pub mod hours;
pub mod permissions;
pub mod roles;
pub mod scope;
pub mod types;
