//! Repository for the `tenants` table.

use sqlx::PgPool;

use salonflow_core::types::DbId;

use crate::models::tenant::{CreateTenant, Tenant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, status, max_salons, max_users, max_storage_mb, \
                        created_at, updated_at";

/// Provides CRUD operations for tenants.
pub struct TenantRepo;

impl TenantRepo {
    /// Insert a new tenant at signup, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTenant) -> Result<Tenant, sqlx::Error> {
        let query = format!(
            "INSERT INTO tenants (name, max_salons, max_users, max_storage_mb)
             VALUES ($1, COALESCE($2, 3), COALESCE($3, 25), COALESCE($4, 1024))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(&input.name)
            .bind(input.max_salons)
            .bind(input.max_users)
            .bind(input.max_storage_mb)
            .fetch_one(pool)
            .await
    }

    /// Find a tenant by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE id = $1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of salons a tenant currently owns, for quota checks.
    pub async fn count_salons(pool: &PgPool, tenant_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM salons WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Number of user accounts a tenant currently owns, for quota checks.
    ///
    /// Global admins carry no tenant id, so they never count against any
    /// tenant's quota.
    pub async fn count_users(pool: &PgPool, tenant_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Flip a tenant's status. Tenants are never hard-deleted.
    ///
    /// Returns `true` if the row was updated.
    pub async fn set_status(
        pool: &PgPool,
        tenant_id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE tenants SET status = $2 WHERE id = $1")
            .bind(tenant_id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
