//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application through the same [`build_app_router`] the binary
//! uses, so every test exercises the full middleware stack.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use salonflow_api::auth::password::hash_password;
use salonflow_api::auth::token::JwtConfig;
use salonflow_api::config::ServerConfig;
use salonflow_api::router::build_app_router;
use salonflow_api::state::AppState;
use salonflow_core::types::DbId;
use salonflow_db::models::salon::CreateSalon;
use salonflow_db::models::staff::CreateStaffMember;
use salonflow_db::models::tenant::CreateTenant;
use salonflow_db::models::user::{CreateUser, User};
use salonflow_db::repositories::{SalonAccessRepo, SalonRepo, StaffRepo, TenantRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router against the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::get(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// GET with a Bearer token and an `X-Salon-Id` header.
pub async fn get_scoped(app: Router, uri: &str, token: &str, salon_id: DbId) -> Response<Body> {
    app.oneshot(
        Request::get(uri)
            .header("authorization", format!("Bearer {token}"))
            .header("x-salon-id", salon_id.to_string())
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::put(uri)
            .header("authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Deserialize a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Database fixtures
// ---------------------------------------------------------------------------

pub const TEST_PASSWORD: &str = "integration-password-1";

/// Create a tenant and one salon inside it.
pub async fn seed_tenant_with_salon(pool: &PgPool, tenant_name: &str) -> (DbId, DbId) {
    let tenant = TenantRepo::create(
        pool,
        &CreateTenant {
            name: tenant_name.to_string(),
            max_salons: None,
            max_users: None,
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

/// Create a user with [`TEST_PASSWORD`] and the given role.
pub async fn seed_user(pool: &PgPool, tenant_id: Option<DbId>, email: &str, role: &str) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            tenant_id,
            email: email.to_string(),
            password_hash: hashed,
            role: role.to_string(),
        },
    )
    .await
    .expect("user fixture")
}

/// Create a user, assign them to a salon, and return the user row.
pub async fn seed_salon_user(
    pool: &PgPool,
    tenant_id: DbId,
    salon_id: DbId,
    email: &str,
    role: &str,
) -> User {
    let user = seed_user(pool, Some(tenant_id), email, role).await;
    SalonAccessRepo::grant(pool, user.id, salon_id)
        .await
        .expect("salon grant fixture");
    user
}

/// Create a staff member in a salon.
pub async fn seed_staff(
    pool: &PgPool,
    tenant_id: DbId,
    salon_id: DbId,
    display_name: &str,
) -> DbId {
    StaffRepo::create(
        pool,
        tenant_id,
        salon_id,
        &CreateStaffMember {
            user_id: None,
            display_name: display_name.to_string(),
        },
    )
    .await
    .expect("staff fixture")
    .id
}

/// Log in via the API and return the access token.
pub async fn login(app: Router, email: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login response must contain access_token")
        .to_string()
}
