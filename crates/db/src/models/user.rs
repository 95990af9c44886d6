//! Account rows and their public projection.

use serde::Serialize;
use sqlx::FromRow;
use studybuddy_core::types::{DbId, Timestamp};

/// A `users` row, including the Argon2 PHC hash. Not `Serialize`; handlers
/// return [`UserResponse`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// What `/users` and `/users/me` return.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Insert input. Registration hashes the password before building this.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}
