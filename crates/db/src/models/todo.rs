//! To-do entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studybuddy_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub is_completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// DTO for updating a to-do. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub is_completed: Option<bool>,
}
