use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Review model - SQL persistence layer
///
/// Reviews are created and deleted, never updated in place.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub rating: i32,
    pub comment: String,
    pub user_id: i32,
    pub movie_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Find review by ID
    pub async fn find_by_id(id: i32, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find all reviews for a movie, oldest first
    pub async fn find_by_movie(movie_id: i32, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM reviews WHERE movie_id = $1 ORDER BY id")
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new review owned by `user_id`
    ///
    /// Foreign keys hold the referential invariant: both the user and
    /// the movie must exist at creation time.
    pub async fn insert(
        rating: i32,
        comment: &str,
        user_id: i32,
        movie_id: i32,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO reviews (rating, comment, user_id, movie_id)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(rating)
        .bind(comment)
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(pool)
        .await
    }

    /// Delete a review; returns false when it did not exist
    pub async fn delete(id: i32, pool: &PgPool) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
