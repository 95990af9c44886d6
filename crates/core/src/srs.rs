//! Spaced-repetition scheduling (SM-2 variant).
//!
//! A card's scheduling state is four numbers: the current interval in days,
//! the ease factor, the number of completed reviews, and the instant the
//! card next becomes due. [`apply_review`] is the single state transition;
//! it is pure and takes `now` explicitly so callers (and tests) control time.
//!
//! Only the latest aggregate state is kept. There is no review history.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Ease factor assigned to a newly created card.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Hard floor for the ease factor. Applied after every review.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Interval for a new card, for the first successful review, and after any
/// failed review.
pub const INITIAL_INTERVAL_DAYS: i32 = 1;

/// Interval after the second successful review.
pub const SECOND_INTERVAL_DAYS: i32 = 6;

/// Ratings strictly below this count as a failed recall.
pub const PASSING_RATING: i32 = 3;

/// Lowest accepted performance rating ("hard / again").
pub const MIN_RATING: i32 = 1;

/// Highest accepted performance rating ("easy").
pub const MAX_RATING: i32 = 5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The scheduling fields of a flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Days until the next review. Always >= 1.
    pub interval: i32,
    /// Growth multiplier for the interval. Always >= [`MIN_EASE_FACTOR`].
    pub ease_factor: f64,
    /// Completed review events.
    pub reviews: i32,
    pub next_review_at: Timestamp,
}

impl Schedule {
    /// Scheduling state for a card created at `now`. The card is due
    /// immediately.
    pub fn new(now: Timestamp) -> Self {
        Self {
            interval: INITIAL_INTERVAL_DAYS,
            ease_factor: DEFAULT_EASE_FACTOR,
            reviews: 0,
            next_review_at: now,
        }
    }

    pub fn is_due(&self, now: Timestamp) -> bool {
        is_due(self.next_review_at, now)
    }
}

/// Anything that carries an owner and a due instant can be filtered by
/// [`select_due`].
pub trait Scheduled {
    fn id(&self) -> DbId;
    fn owner_id(&self) -> DbId;
    fn next_review_at(&self) -> Timestamp;
}

// ---------------------------------------------------------------------------
// Review transition
// ---------------------------------------------------------------------------

/// Reject ratings outside `MIN_RATING..=MAX_RATING`.
///
/// [`apply_review`] accepts any integer; this check belongs at the boundary
/// where ratings enter the system.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "performance_rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Interval after a review, computed from the state *before* the review.
///
/// A failed recall restarts the card. Successful recalls walk the fixed
/// bootstrap steps (1 day, then 6 days) and then grow by the ease factor.
pub fn next_interval(current: &Schedule, rating: i32) -> i32 {
    if rating < PASSING_RATING {
        return INITIAL_INTERVAL_DAYS;
    }
    match current.reviews {
        0 => INITIAL_INTERVAL_DAYS,
        1 => SECOND_INTERVAL_DAYS,
        // `f64::round` rounds half away from zero; `as` saturates.
        _ => (f64::from(current.interval) * current.ease_factor).round() as i32,
    }
}

/// SM-2 ease update, clamped to [`MIN_EASE_FACTOR`].
///
/// Applied on every review, pass or fail.
pub fn next_ease_factor(ease_factor: f64, rating: i32) -> f64 {
    // Converted before subtracting so extreme ratings cannot overflow.
    let miss = f64::from(MAX_RATING) - f64::from(rating);
    let updated = ease_factor + (0.1 - miss * (0.08 + miss * 0.02));
    updated.max(MIN_EASE_FACTOR)
}

/// `now + interval days`, saturating at the largest representable instant.
pub fn due_after(now: Timestamp, interval: i32) -> Timestamp {
    now.checked_add_signed(TimeDelta::days(i64::from(interval)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Apply one review with the given performance rating at instant `now`.
///
/// Interval and ease are both derived from the pre-review state; the due
/// instant uses the new interval. The returned value replaces all four
/// fields at once.
pub fn apply_review(current: &Schedule, rating: i32, now: Timestamp) -> Schedule {
    let interval = next_interval(current, rating);
    let ease_factor = next_ease_factor(current.ease_factor, rating);

    Schedule {
        interval,
        ease_factor,
        reviews: current.reviews.saturating_add(1),
        next_review_at: due_after(now, interval),
    }
}

// ---------------------------------------------------------------------------
// Due selection
// ---------------------------------------------------------------------------

/// A card is due once its scheduled instant has arrived.
pub fn is_due(next_review_at: Timestamp, now: Timestamp) -> bool {
    next_review_at <= now
}

/// Cards owned by `owner_id` that are due at `now`, ordered by due instant
/// then id. Does not modify anything.
pub fn select_due<T: Scheduled>(cards: &[T], owner_id: DbId, now: Timestamp) -> Vec<&T> {
    let mut due: Vec<&T> = cards
        .iter()
        .filter(|c| c.owner_id() == owner_id && is_due(c.next_review_at(), now))
        .collect();
    due.sort_by_key(|c| (c.next_review_at(), c.id()));
    due
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
