//! Handlers for the `/todos` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use studybuddy_core::error::CoreError;
use studybuddy_core::types::DbId;
use studybuddy_core::validation::validate_text;
use studybuddy_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use studybuddy_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Todo", id })
}

/// POST /api/v1/todos
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let Json(input) = payload?;
    validate_text("title", &input.title)?;
    let todo = TodoRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/v1/todos
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list_by_owner(&state.pool, auth.user_id).await?;
    Ok(Json(todos))
}

/// PUT /api/v1/todos/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> AppResult<Json<Todo>> {
    let Json(input) = payload?;
    if let Some(ref title) = input.title {
        validate_text("title", title)?;
    }
    let todo = TodoRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(todo))
}

/// DELETE /api/v1/todos/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TodoRepo::delete(&state.pool, id, auth.user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
