//! Route definitions for the `/staff` resource and its nested
//! pattern/shift sub-resources.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{shift_patterns, shifts, staff};
use crate::state::AppState;

/// Routes mounted at `/staff`.
///
/// ```text
/// GET    /                                        list staff in active salon
/// POST   /                                        create staff (manager)
/// GET    /{staff_id}                              get one staff member
/// DELETE /{staff_id}                              deactivate (manager)
///
/// GET    /{staff_id}/patterns                     list weekly patterns
/// POST   /{staff_id}/patterns                     add a pattern
/// PUT    /{staff_id}/patterns/{pattern_id}        update a pattern's times
/// DELETE /{staff_id}/patterns/{pattern_id}        delete a pattern
///
/// GET    /{staff_id}/shifts?from=..&to=..         list shifts in range
/// POST   /{staff_id}/shifts/expand                expand patterns (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/{staff_id}",
            get(staff::get_staff).delete(staff::deactivate_staff),
        )
        .route(
            "/{staff_id}/patterns",
            get(shift_patterns::list_patterns).post(shift_patterns::create_pattern),
        )
        .route(
            "/{staff_id}/patterns/{pattern_id}",
            delete(shift_patterns::delete_pattern).put(shift_patterns::update_pattern),
        )
        .route("/{staff_id}/shifts", get(shifts::list_shifts))
        .route("/{staff_id}/shifts/expand", post(shifts::expand_shifts))
}
