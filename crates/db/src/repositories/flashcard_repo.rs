//! Repository for the `flashcards` table.

use sqlx::PgPool;
use studybuddy_core::srs::{self, Schedule};
use studybuddy_core::types::{DbId, Timestamp};

use crate::models::flashcard::{CreateFlashcard, Flashcard, UpdateFlashcard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, question, answer, next_review_at, \"interval\", \
                       ease_factor, reviews, created_at, updated_at";

pub struct FlashcardRepo;

impl FlashcardRepo {
    /// Insert a new flashcard with default scheduling state, due at `now`.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateFlashcard,
        now: Timestamp,
    ) -> Result<Flashcard, sqlx::Error> {
        let schedule = Schedule::new(now);
        let query = format!(
            "INSERT INTO flashcards
                (owner_id, question, answer, next_review_at, \"interval\", ease_factor, reviews)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(owner_id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(schedule.next_review_at)
            .bind(schedule.interval)
            .bind(schedule.ease_factor)
            .bind(schedule.reviews)
            .fetch_one(pool)
            .await
    }

    /// Find a flashcard by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Flashcard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcards WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List every flashcard owned by `owner_id`, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Flashcard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM flashcards WHERE owner_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Flashcards owned by `owner_id` with `next_review_at <= now`.
    ///
    /// Ordered by due instant, then id, matching [`srs::select_due`].
    pub async fn list_due(
        pool: &PgPool,
        owner_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<Flashcard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM flashcards
             WHERE owner_id = $1 AND next_review_at <= $2
             ORDER BY next_review_at, id"
        );
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(owner_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Edit question and/or answer. Scheduling fields are not touched.
    ///
    /// Returns `None` if the card does not exist or is not owned by `owner_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateFlashcard,
    ) -> Result<Option<Flashcard>, sqlx::Error> {
        let query = format!(
            "UPDATE flashcards SET
                question = COALESCE($3, question),
                answer = COALESCE($4, answer)
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.question)
            .bind(&input.answer)
            .fetch_optional(pool)
            .await
    }

    /// Delete a flashcard. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flashcards WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record one review of a flashcard at instant `now`.
    ///
    /// Runs as a single transaction: the row is locked with `FOR UPDATE`,
    /// the next schedule is computed from the locked state, and all four
    /// scheduling fields are written together. Concurrent reviews of the
    /// same card serialize on the lock and each sees the previous result.
    ///
    /// The rating is not validated here; see [`srs::validate_rating`].
    /// Returns `None` if the card does not exist or is not owned by `owner_id`.
    pub async fn apply_review(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        rating: i32,
        now: Timestamp,
    ) -> Result<Option<Flashcard>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!(
            "SELECT {COLUMNS} FROM flashcards WHERE id = $1 AND owner_id = $2 FOR UPDATE"
        );
        let Some(card) = sqlx::query_as::<_, Flashcard>(&select)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        let next = srs::apply_review(&card.schedule(), rating, now);

        let update = format!(
            "UPDATE flashcards SET
                \"interval\" = $2,
                ease_factor = $3,
                reviews = $4,
                next_review_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Flashcard>(&update)
            .bind(card.id)
            .bind(next.interval)
            .bind(next.ease_factor)
            .bind(next.reviews)
            .bind(next.next_review_at)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            flashcard_id = updated.id,
            rating,
            interval = updated.interval,
            ease_factor = updated.ease_factor,
            reviews = updated.reviews,
            "Applied flashcard review"
        );

        Ok(Some(updated))
    }
}
