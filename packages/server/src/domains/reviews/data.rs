use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domains::reviews::models::Review;

/// Public API representation of a review
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    pub id: i32,
    pub rating: i32,
    pub comment: String,
    pub user_id: i32,
    pub movie_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewData {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            comment: review.comment,
            user_id: review.user_id,
            movie_id: review.movie_id,
            created_at: review.created_at,
        }
    }
}
