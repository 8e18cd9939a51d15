//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods over tenant-owned
//! data take `(tenant_id, salon_id, ...)` as leading arguments and bind
//! them in every WHERE clause; an entity outside that scope is
//! indistinguishable from one that does not exist.

pub mod appointment_repo;
pub mod salon_access_repo;
pub mod salon_repo;
pub mod session_repo;
pub mod shift_pattern_repo;
pub mod shift_repo;
pub mod staff_repo;
pub mod tenant_repo;
pub mod user_repo;

pub use appointment_repo::AppointmentRepo;
pub use salon_access_repo::SalonAccessRepo;
pub use salon_repo::SalonRepo;
pub use session_repo::SessionRepo;
pub use shift_pattern_repo::ShiftPatternRepo;
pub use shift_repo::ShiftRepo;
pub use staff_repo::StaffRepo;
pub use tenant_repo::TenantRepo;
pub use user_repo::UserRepo;
