//! Handlers for the `/users` resource (registration, profile, stats).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use studybuddy_core::error::CoreError;
use studybuddy_core::validation::{normalize_email, validate_email};
use studybuddy_db::models::stats::UserStats;
use studybuddy_db::models::user::{CreateUser, UserResponse};
use studybuddy_db::repositories::{StatsRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/users
///
/// Register a new account. Emails are stored lower-cased; a second
/// registration with the same email is a 409.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let Json(input) = payload?;

    let email = normalize_email(&input.email);
    validate_email(&email)?;
    validate_password_strength(&input.password)?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/users/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::Unauthorized(
            "User no longer exists".into(),
        )))?;
    Ok(Json(user.into()))
}

/// GET /api/v1/users/me/stats
pub async fn stats(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<UserStats>> {
    let stats = StatsRepo::for_user(&state.pool, auth.user_id, chrono::Utc::now()).await?;
    Ok(Json(stats))
}
