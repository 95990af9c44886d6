//! Repository for the `todos` table.

use sqlx::PgPool;
use studybuddy_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

const COLUMNS: &str = "id, owner_id, title, is_completed, created_at, updated_at";

pub struct TodoRepo;

impl TodoRepo {
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateTodo,
    ) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (owner_id, title)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// List an owner's to-dos, oldest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Todo>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM todos WHERE owner_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Todo>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a to-do. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the to-do does not exist or is not owned by `owner_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = COALESCE($3, title),
                is_completed = COALESCE($4, is_completed)
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(input.is_completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a to-do. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
