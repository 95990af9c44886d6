//! Route definitions for `/todos`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list).post(todos::create))
        .route("/{id}", put(todos::update).delete(todos::delete))
}
