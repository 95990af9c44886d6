//! Integration tests for registration, login and the current-user endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;
use studybuddy_api::auth::jwt::Claims;

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_201_without_password_hash(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "Alice@Example.com", "password": TEST_PASSWORD });

    let response = post_json(app, "/api/v1/users", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "alice@example.com");
    assert!(json["id"].is_i64());
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_duplicate_email_returns_409(pool: PgPool) {
    common::register_and_login(&pool, "dup@example.com").await;

    let app = common::build_test_app(pool);
    let body = json!({ "email": "DUP@example.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/users", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Email already registered");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "not-an-email", "password": TEST_PASSWORD });

    let response = post_json(app, "/api/v1/users", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "short@example.com", "password": "abc" });

    let response = post_json(app, "/api/v1/users", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_bearer_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = json!({ "email": "login@example.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/users", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/token", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["expires_in"], 1800);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_wrong_password_returns_401(pool: PgPool) {
    common::register_and_login(&pool, "wrong@example.com").await;

    let app = common::build_test_app(pool);
    let body = json!({ "email": "wrong@example.com", "password": "definitely-not-it" });
    let response = post_json(app, "/api/v1/auth/token", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Incorrect email or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_unknown_email_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "nobody@example.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/token", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Incorrect email or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_current_user(pool: PgPool) {
    let token = common::register_and_login(&pool, "me@example.com").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/users/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "me@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_with_garbage_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/users/me", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_with_non_numeric_subject_returns_401(pool: PgPool) {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "me@example.com".to_string(),
        exp: now + 600,
        iat: now,
        jti: "fixed-jti".to_string(),
    };
    let secret = common::test_config().jwt.secret;
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/users/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}
