//! Accessible-salon lookup, polymorphic by role.
//!
//! This is the one query scope resolution depends on, so its ordering is
//! part of its contract: results are always ordered by salon id, which
//! makes the "default to the first accessible salon" rule deterministic.

use sqlx::PgPool;

use salonflow_core::roles::Role;
use salonflow_core::types::DbId;

use crate::models::salon::AccessibleSalon;
use crate::models::user::User;

/// Resolves which salons a user may act against.
pub struct SalonAccessRepo;

impl SalonAccessRepo {
    /// The set of active salons `user` may access, ordered by id.
    ///
    /// - `global_admin`: every active salon in the installation
    /// - `tenant_admin`: every active salon in the user's tenant
    /// - `manager` / `staff`: only salons explicitly assigned via
    ///   `user_salons`, still filtered by the user's own tenant
    pub async fn accessible_salons(
        pool: &PgPool,
        user: &User,
        role: Role,
    ) -> Result<Vec<AccessibleSalon>, sqlx::Error> {
        match role {
            Role::GlobalAdmin => {
                sqlx::query_as::<_, AccessibleSalon>(
                    "SELECT id, tenant_id, name FROM salons
                     WHERE status = 'active'
                     ORDER BY id",
                )
                .fetch_all(pool)
                .await
            }
            Role::TenantAdmin => {
                sqlx::query_as::<_, AccessibleSalon>(
                    "SELECT id, tenant_id, name FROM salons
                     WHERE tenant_id = $1 AND status = 'active'
                     ORDER BY id",
                )
                .bind(user.tenant_id)
                .fetch_all(pool)
                .await
            }
            Role::Manager | Role::Staff => {
                sqlx::query_as::<_, AccessibleSalon>(
                    "SELECT s.id, s.tenant_id, s.name
                     FROM salons s
                     JOIN user_salons us ON us.salon_id = s.id
                     WHERE us.user_id = $1
                       AND s.tenant_id = $2
                       AND s.status = 'active'
                     ORDER BY s.id",
                )
                .bind(user.id)
                .bind(user.tenant_id)
                .fetch_all(pool)
                .await
            }
        }
    }

    /// Assign a salon to a user. Idempotent.
    pub async fn grant(pool: &PgPool, user_id: DbId, salon_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_salons (user_id, salon_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, salon_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(salon_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a salon assignment. Returns `true` if a row was deleted.
    pub async fn revoke(pool: &PgPool, user_id: DbId, salon_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM user_salons WHERE user_id = $1 AND salon_id = $2",
        )
        .bind(user_id)
        .bind(salon_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
