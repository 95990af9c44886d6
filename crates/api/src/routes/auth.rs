//! Route definitions for `/auth`.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST   /token     -> token
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/token", post(auth::token))
}
