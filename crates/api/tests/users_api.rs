//! HTTP-level integration tests for user provisioning: role requirements,
//! the tenant user quota, and salon assignment during creation.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, login, post_json_auth, seed_salon_user, seed_tenant_with_salon,
    seed_user,
};
use salonflow_core::types::DbId;
use salonflow_db::models::salon::CreateSalon;
use salonflow_db::models::tenant::CreateTenant;
use salonflow_db::repositories::{SalonRepo, TenantRepo};
use sqlx::PgPool;

/// A tenant with a user quota of one, plus a salon.
async fn seed_capped_tenant(pool: &PgPool, name: &str) -> (DbId, DbId) {
    let tenant = TenantRepo::create(
        pool,
        &CreateTenant {
            name: name.to_string(),
            max_salons: None,
            max_users: Some(1),
            max_storage_mb: None,
        },
    )
    .await
    .expect("tenant fixture");

    let salon = SalonRepo::create(
        pool,
        tenant.id,
        &CreateSalon {
            name: "Main".to_string(),
            open_time: None,
            close_time: None,
            slot_interval_mins: None,
        },
    )
    .await
    .expect("salon fixture");

    (tenant.id, salon.id)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tenant_admin_provisions_a_staff_user(pool: PgPool) {
    let (tenant_id, salon_id) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    seed_user(&pool, Some(tenant_id), "admin@test.com", "tenant_admin").await;

    let token = login(common::build_test_app(pool.clone()), "admin@test.com").await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        &token,
        serde_json::json!({
            "email": "newstaff@test.com",
            "password": common::TEST_PASSWORD,
            "role": "staff",
            "salon_ids": [salon_id],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "newstaff@test.com");
    assert_eq!(json["data"]["role"], "staff");
    assert_eq!(json["data"]["tenant_id"], tenant_id);
    assert!(json["data"].get("password_hash").is_none(), "hash must never serialize");

    // The new account can log in and resolves the assigned salon.
    let staff_token = login(common::build_test_app(pool.clone()), "newstaff@test.com").await;
    let response = get_auth(common::build_test_app(pool), "/api/v1/me/scope", &staff_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["salon_id"], salon_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn user_quota_is_enforced(pool: PgPool) {
    let (tenant_id, salon_id) = seed_capped_tenant(&pool, "Shear Genius").await;
    // The admin account itself fills the quota of one.
    seed_user(&pool, Some(tenant_id), "admin@test.com", "tenant_admin").await;

    let token = login(common::build_test_app(pool.clone()), "admin@test.com").await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        &token,
        serde_json::json!({
            "email": "overflow@test.com",
            "password": "long-enough-password",
            "role": "staff",
            "salon_ids": [salon_id],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE tenant_id = $1")
        .bind(tenant_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "no user may be created past the quota");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn manager_may_not_provision_users(pool: PgPool) {
    let (tenant_id, salon_id) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    seed_salon_user(&pool, tenant_id, salon_id, "manager@test.com", "manager").await;

    let token = login(common::build_test_app(pool.clone()), "manager@test.com").await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/users",
        &token,
        serde_json::json!({
            "email": "newstaff@test.com",
            "password": "long-enough-password",
            "role": "staff",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn global_admin_role_cannot_be_provisioned(pool: PgPool) {
    let (tenant_id, _salon_id) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    seed_user(&pool, Some(tenant_id), "admin@test.com", "tenant_admin").await;

    let token = login(common::build_test_app(pool.clone()), "admin@test.com").await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/users",
        &token,
        serde_json::json!({
            "email": "root@test.com",
            "password": "long-enough-password",
            "role": "global_admin",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A salon id from another tenant is indistinguishable from a missing one.
#[sqlx::test(migrations = "../db/migrations")]
async fn assignment_to_a_foreign_salon_is_not_found(pool: PgPool) {
    let (tenant_a, _salon_a) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    let (_tenant_b, salon_b) = seed_tenant_with_salon(&pool, "Mane Event").await;
    seed_user(&pool, Some(tenant_a), "admin@test.com", "tenant_admin").await;

    let token = login(common::build_test_app(pool.clone()), "admin@test.com").await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        &token,
        serde_json::json!({
            "email": "newstaff@test.com",
            "password": "long-enough-password",
            "role": "staff",
            "salon_ids": [salon_b],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = 'newstaff@test.com'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 0);
}
