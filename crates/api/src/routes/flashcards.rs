//! Route definitions for `/flashcards`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::flashcards;
use crate::state::AppState;

/// Routes mounted at `/flashcards`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /due             -> list_due
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// POST   /{id}/review     -> review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flashcards::list).post(flashcards::create))
        .route("/due", get(flashcards::list_due))
        .route(
            "/{id}",
            get(flashcards::get_by_id)
                .put(flashcards::update)
                .delete(flashcards::delete),
        )
        .route("/{id}/review", post(flashcards::review))
}
