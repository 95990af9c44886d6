//! Per-user study statistics.

use serde::Serialize;

/// Aggregate counts shown on the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    /// Sum of `reviews` across the user's flashcards.
    pub total_cards_reviewed: i64,
    pub total_flashcards: i64,
    /// Flashcards due at the instant the stats were computed.
    pub due_flashcards: i64,
    pub completed_todos: i64,
    /// Estimated from the review count; see `studybuddy_core::stats`.
    pub total_study_hours: f64,
}
