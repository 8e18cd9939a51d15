//! HTTP-level integration tests for scope resolution: default salon
//! selection, the `X-Salon-Id` header, and cross-tenant isolation.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, get_scoped, login, post_json_auth, seed_salon_user,
    seed_tenant_with_salon, seed_user,
};
use salonflow_db::models::salon::CreateSalon;
use salonflow_db::repositories::{SalonAccessRepo, SalonRepo};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn scope_defaults_to_lowest_accessible_salon(pool: PgPool) {
    let (tenant_id, first_salon) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    let second_salon = SalonRepo::create(
        &pool,
        tenant_id,
        &CreateSalon {
            name: "Annex".to_string(),
            open_time: None,
            close_time: None,
            slot_interval_mins: None,
        },
    )
    .await
    .unwrap();

    let user = seed_salon_user(&pool, tenant_id, first_salon, "staff@test.com", "staff").await;
    SalonAccessRepo::grant(&pool, user.id, second_salon.id)
        .await
        .unwrap();

    let token = login(common::build_test_app(pool.clone()), "staff@test.com").await;
    let response = get_auth(common::build_test_app(pool), "/api/v1/me/scope", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["salon_id"], first_salon);
    assert_eq!(json["data"]["tenant_id"], tenant_id);
    assert_eq!(
        json["data"]["accessible_salon_ids"],
        serde_json::json!([first_salon, second_salon.id])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn salon_header_switches_the_active_salon(pool: PgPool) {
    let (tenant_id, first_salon) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    let second_salon = SalonRepo::create(
        &pool,
        tenant_id,
        &CreateSalon {
            name: "Annex".to_string(),
            open_time: None,
            close_time: None,
            slot_interval_mins: None,
        },
    )
    .await
    .unwrap();

    let user = seed_salon_user(&pool, tenant_id, first_salon, "staff@test.com", "staff").await;
    SalonAccessRepo::grant(&pool, user.id, second_salon.id)
        .await
        .unwrap();

    let token = login(common::build_test_app(pool.clone()), "staff@test.com").await;
    let response = get_scoped(
        common::build_test_app(pool),
        "/api/v1/me/scope",
        &token,
        second_salon.id,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["salon_id"], second_salon.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn requesting_an_unassigned_salon_is_forbidden(pool: PgPool) {
    let (tenant_a, salon_a) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    let (_tenant_b, salon_b) = seed_tenant_with_salon(&pool, "Mane Event").await;
    seed_salon_user(&pool, tenant_a, salon_a, "staff@test.com", "staff").await;

    let token = login(common::build_test_app(pool.clone()), "staff@test.com").await;
    let response = get_scoped(
        common::build_test_app(pool),
        "/api/v1/me/scope",
        &token,
        salon_b,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn user_with_no_salons_gets_the_dedicated_code(pool: PgPool) {
    let (tenant_id, _salon) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    // User exists in the tenant but was never assigned to a salon.
    seed_user(&pool, Some(tenant_id), "unassigned@test.com", "staff").await;

    let token = login(common::build_test_app(pool.clone()), "unassigned@test.com").await;
    let response = get_auth(common::build_test_app(pool), "/api/v1/me/scope", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "NO_ACCESSIBLE_SALON");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tenant_admin_sees_all_salons_without_explicit_grants(pool: PgPool) {
    let (tenant_id, first_salon) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    let second_salon = SalonRepo::create(
        &pool,
        tenant_id,
        &CreateSalon {
            name: "Annex".to_string(),
            open_time: None,
            close_time: None,
            slot_interval_mins: None,
        },
    )
    .await
    .unwrap();
    seed_user(&pool, Some(tenant_id), "admin@test.com", "tenant_admin").await;

    let token = login(common::build_test_app(pool.clone()), "admin@test.com").await;
    let response = get_auth(common::build_test_app(pool), "/api/v1/me/salons", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first_salon, second_salon.id]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn global_admin_spans_tenants(pool: PgPool) {
    let (_tenant_a, salon_a) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    let (tenant_b, salon_b) = seed_tenant_with_salon(&pool, "Mane Event").await;
    seed_user(&pool, None, "root@test.com", "global_admin").await;

    let token = login(common::build_test_app(pool.clone()), "root@test.com").await;

    // Selecting a salon in tenant B resolves tenant B as the scope tenant.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/me/salons/{salon_b}/select"),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["salon_id"], salon_b);
    assert_eq!(json["data"]["tenant_id"], tenant_b);

    let response = get_auth(common::build_test_app(pool), "/api/v1/me/salons", &token).await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![salon_a, salon_b]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_salon_header_is_a_validation_error(pool: PgPool) {
    let (tenant_id, salon_id) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    seed_salon_user(&pool, tenant_id, salon_id, "staff@test.com", "staff").await;

    let token = login(common::build_test_app(pool.clone()), "staff@test.com").await;
    let app = common::build_test_app(pool);
    let response = app
        .oneshot(
            axum::http::Request::get("/api/v1/me/scope")
                .header("authorization", format!("Bearer {token}"))
                .header("x-salon-id", "not-a-number")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A demotion applies on the next request, not when the token expires:
/// scope carries the stored role, and permissions follow it.
#[sqlx::test(migrations = "../db/migrations")]
async fn role_demotion_applies_before_token_expiry(pool: PgPool) {
    let (tenant_id, salon_id) = seed_tenant_with_salon(&pool, "Shear Genius").await;
    seed_salon_user(&pool, tenant_id, salon_id, "manager@test.com", "manager").await;
    let staff_id = common::seed_staff(&pool, tenant_id, salon_id, "Alex").await;

    let token = login(common::build_test_app(pool.clone()), "manager@test.com").await;

    sqlx::query("UPDATE users SET role = 'staff' WHERE email = 'manager@test.com'")
        .execute(&pool)
        .await
        .unwrap();

    // The still-valid token now resolves to the demoted role.
    let response = get_auth(common::build_test_app(pool.clone()), "/api/v1/me/scope", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["role"], "staff");

    // Manager-only operations are rejected immediately.
    let response = post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/staff/{staff_id}/shifts/expand"),
        &token,
        serde_json::json!({ "start_date": "2024-06-03", "end_date": "2024-06-09" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
