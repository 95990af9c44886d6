//! Route definitions for `/users`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// POST   /            -> register
/// GET    /me          -> me
/// GET    /me/stats    -> stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register))
        .route("/me", get(users::me))
        .route("/me/stats", get(users::stats))
}
