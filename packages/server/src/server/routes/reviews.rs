//! Review endpoints: create, list per movie, aggregate, delete.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::auth::{policy, AuthUser};
use crate::domains::movies::Movie;
use crate::domains::reviews::{average_rating, Review, ReviewData};
use crate::server::app::AppState;
use crate::server::extract::Json;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// POST /movies/:id/reviews — review is owned by the caller
pub async fn create_review(
    Extension(state): Extension<AppState>,
    caller: AuthUser,
    Path(movie_id): Path<i32>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewData>), ApiError> {
    let (Some(rating), Some(comment)) =
        (body.rating, body.comment.filter(|c| !c.is_empty()))
    else {
        return Err(ApiError::Validation(
            "Rating and comment are required".to_string(),
        ));
    };

    if Movie::find_by_id(movie_id, &state.db_pool).await?.is_none() {
        return Err(ApiError::NotFound("Movie not found".to_string()));
    }

    let review = Review::insert(rating, &comment, caller.id, movie_id, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Reduced movie header rendered next to its review list
#[derive(Debug, Serialize)]
pub struct MovieSummary {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MovieReviewsResponse {
    pub movie: MovieSummary,
    pub reviews: Vec<ReviewData>,
}

/// GET /movies/:id/reviews
pub async fn list_reviews(
    Extension(state): Extension<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<Json<MovieReviewsResponse>, ApiError> {
    let movie = Movie::find_by_id(movie_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    let reviews = Review::find_by_movie(movie.id, &state.db_pool).await?;

    Ok(Json(MovieReviewsResponse {
        movie: MovieSummary {
            id: movie.id,
            title: movie.title,
            description: movie.details.description,
        },
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

/// GET /movies/:id/average-rating
///
/// Aggregate only; a movie without reviews (or an unknown id) reports
/// 0, matching the empty-set contract of the aggregator.
pub async fn movie_average_rating(
    Extension(state): Extension<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let reviews = Review::find_by_movie(movie_id, &state.db_pool).await?;

    Ok(Json(json!({
        "movieId": movie_id,
        "averageRating": average_rating(&reviews),
    })))
}

/// DELETE /reviews/:id — owner or admin
pub async fn delete_review(
    Extension(state): Extension<AppState>,
    caller: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let review = Review::find_by_id(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Review not found".to_string()))?;

    policy::can_delete_review(&caller, review.user_id)?;
    Review::delete(review.id, &state.db_pool).await?;

    Ok(Json(json!({ "message": "Review deleted successfully" })))
}
