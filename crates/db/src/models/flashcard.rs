//! Flashcard entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studybuddy_core::srs::{Schedule, Scheduled};
use studybuddy_core::types::{DbId, Timestamp};

/// A row from the `flashcards` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Flashcard {
    pub id: DbId,
    pub owner_id: DbId,
    pub question: String,
    pub answer: String,
    pub next_review_at: Timestamp,
    pub interval: i32,
    pub ease_factor: f64,
    pub reviews: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Flashcard {
    /// The scheduling fields as a value the SRS engine operates on.
    pub fn schedule(&self) -> Schedule {
        Schedule {
            interval: self.interval,
            ease_factor: self.ease_factor,
            reviews: self.reviews,
            next_review_at: self.next_review_at,
        }
    }
}

impl Scheduled for Flashcard {
    fn id(&self) -> DbId {
        self.id
    }

    fn owner_id(&self) -> DbId {
        self.owner_id
    }

    fn next_review_at(&self) -> Timestamp {
        self.next_review_at
    }
}

/// DTO for creating a flashcard. Scheduling fields start at their defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlashcard {
    pub question: String,
    pub answer: String,
}

/// DTO for editing a flashcard's content. Scheduling is untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFlashcard {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// Request body for `POST /flashcards/{id}/review`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewFlashcard {
    pub performance_rating: i32,
}
