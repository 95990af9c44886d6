pub mod auth;
pub mod flashcards;
pub mod health;
pub mod todos;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/token                      login (public)
///
/// /users                           register (public)
/// /users/me                        current user
/// /users/me/stats                  study statistics
///
/// /flashcards                      list, create
/// /flashcards/due                  cards due for review now
/// /flashcards/{id}                 get, update, delete
/// /flashcards/{id}/review          record a review (POST)
///
/// /todos                           list, create
/// /todos/{id}                      update, delete
/// ```
///
/// Everything except `/auth/token` and `POST /users` requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/flashcards", flashcards::router())
        .nest("/todos", todos::router())
}
