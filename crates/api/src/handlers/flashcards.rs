//! Handlers for the `/flashcards` resource, including SRS review and the
//! due-card query.
//!
//! Every handler is scoped to the authenticated user. A card that exists but
//! belongs to someone else is reported as 404, same as a missing one.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use studybuddy_core::error::CoreError;
use studybuddy_core::srs;
use studybuddy_core::types::DbId;
use studybuddy_core::validation::validate_text;
use studybuddy_db::models::flashcard::{
    CreateFlashcard, Flashcard, ReviewFlashcard, UpdateFlashcard,
};
use studybuddy_db::repositories::FlashcardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Flashcard",
        id,
    })
}

/// POST /api/v1/flashcards
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateFlashcard>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Flashcard>)> {
    let Json(input) = payload?;
    validate_text("question", &input.question)?;
    validate_text("answer", &input.answer)?;

    let card = FlashcardRepo::create(&state.pool, auth.user_id, &input, Utc::now()).await?;

    tracing::info!(user_id = auth.user_id, flashcard_id = card.id, "Flashcard created");

    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /api/v1/flashcards
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Flashcard>>> {
    let cards = FlashcardRepo::list_by_owner(&state.pool, auth.user_id).await?;
    Ok(Json(cards))
}

/// GET /api/v1/flashcards/due
///
/// Cards whose `next_review_at` is at or before the current instant, oldest
/// due first. Read-only.
pub async fn list_due(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Flashcard>>> {
    let cards = FlashcardRepo::list_due(&state.pool, auth.user_id, Utc::now()).await?;

    tracing::debug!(user_id = auth.user_id, count = cards.len(), "Fetched due flashcards");

    Ok(Json(cards))
}

/// GET /api/v1/flashcards/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Flashcard>> {
    let card = FlashcardRepo::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(card))
}

/// PUT /api/v1/flashcards/{id}
///
/// Edits content only; the review schedule is preserved.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdateFlashcard>, JsonRejection>,
) -> AppResult<Json<Flashcard>> {
    let Json(input) = payload?;
    if let Some(ref question) = input.question {
        validate_text("question", question)?;
    }
    if let Some(ref answer) = input.answer {
        validate_text("answer", answer)?;
    }

    let card = FlashcardRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(card))
}

/// DELETE /api/v1/flashcards/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FlashcardRepo::delete(&state.pool, id, auth.user_id).await? {
        tracing::info!(user_id = auth.user_id, flashcard_id = id, "Flashcard deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/flashcards/{id}/review
///
/// Rates recall of one card on a 1-5 scale and reschedules it. The rating
/// is range-checked here; the read-modify-write runs in a single
/// transaction in the repository.
pub async fn review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<ReviewFlashcard>, JsonRejection>,
) -> AppResult<Json<Flashcard>> {
    let Json(input) = payload?;
    srs::validate_rating(input.performance_rating)?;

    let card = FlashcardRepo::apply_review(
        &state.pool,
        id,
        auth.user_id,
        input.performance_rating,
        Utc::now(),
    )
    .await?
    .ok_or_else(|| not_found(id))?;

    tracing::info!(
        user_id = auth.user_id,
        flashcard_id = card.id,
        rating = input.performance_rating,
        interval = card.interval,
        "Flashcard reviewed"
    );

    Ok(Json(card))
}
