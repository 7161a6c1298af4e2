//! Derived aggregate rating.
//!
//! Pure computation over an in-memory review set; the single
//! implementation behind the movie list, movie detail, and
//! average-rating endpoints, so every call site rounds identically.

use crate::domains::reviews::models::Review;

/// Arithmetic mean of the review ratings, rounded to 2 decimal
/// places. An empty review set yields 0.0, never an error.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    // Widen before summing; an i32 accumulator can overflow on large
    // or adversarial rating values.
    let total: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
    let mean = total as f64 / reviews.len() as f64;

    (mean * 100.0).round() / 100.0
}
