//! Study statistics derived from review counts.

/// Estimated minutes spent per review event.
pub const MINUTES_PER_REVIEW: i64 = 3;

/// Estimated study time for `total_reviews` reviews, in hours rounded to one
/// decimal place.
pub fn study_hours(total_reviews: i64) -> f64 {
    let minutes = total_reviews.max(0).saturating_mul(MINUTES_PER_REVIEW);
    // Tenths of an hour are 6-minute units; round half up in integers.
    let tenths = minutes.saturating_add(3) / 6;
    tenths as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_reviews_is_zero_hours() {
        assert_eq!(study_hours(0), 0.0);
    }

    #[test]
    fn twenty_reviews_is_one_hour() {
        assert_eq!(study_hours(20), 1.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 7 * 3 = 21 minutes = 0.35h
        assert_eq!(study_hours(7), 0.4);
        // 33 * 3 = 99 minutes = 1.65h
        assert_eq!(study_hours(33), 1.7);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(study_hours(-5), 0.0);
    }
}
