//! Aggregate queries behind `GET /users/me/stats`.

use sqlx::PgPool;
use studybuddy_core::stats::study_hours;
use studybuddy_core::types::{DbId, Timestamp};

use crate::models::stats::UserStats;

pub struct StatsRepo;

impl StatsRepo {
    /// Compute study statistics for `owner_id`, counting cards due at `now`.
    pub async fn for_user(
        pool: &PgPool,
        owner_id: DbId,
        now: Timestamp,
    ) -> Result<UserStats, sqlx::Error> {
        let (total_flashcards, total_cards_reviewed, due_flashcards): (i64, i64, i64) =
            sqlx::query_as(
                "SELECT COUNT(*)::BIGINT,
                        COALESCE(SUM(reviews), 0)::BIGINT,
                        COUNT(*) FILTER (WHERE next_review_at <= $2)::BIGINT
                 FROM flashcards
                 WHERE owner_id = $1",
            )
            .bind(owner_id)
            .bind(now)
            .fetch_one(pool)
            .await?;

        let (completed_todos,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)::BIGINT FROM todos WHERE owner_id = $1 AND is_completed",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        Ok(UserStats {
            total_cards_reviewed,
            total_flashcards,
            due_flashcards,
            completed_todos,
            total_study_hours: study_hours(total_cards_reviewed),
        })
    }
}
