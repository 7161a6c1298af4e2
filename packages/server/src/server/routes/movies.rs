//! Movie catalogue endpoints: listing, search, detail, CRUD.
//!
//! Create and update carry no auth check; deletion is admin-only.
//! The asymmetry is preserved from the observed behavior of the
//! original service.

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::common::{ApiError, Page};
use crate::domains::auth::{policy, AuthUser};
use crate::domains::movies::{Movie, MovieData, MovieFilter, MovieInput, MovieWithRating};
use crate::domains::reviews::{average_rating, Review, ReviewData};
use crate::server::app::AppState;
use crate::server::extract::Json;

#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListResponse {
    pub page: i64,
    pub total_pages: i64,
    pub data: Vec<MovieWithRating>,
}

/// GET /movies
///
/// Optional exact-match genre/year filters, then a page/limit slice.
/// Every item carries its derived average rating.
pub async fn list_movies(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let page = Page::new(query.page, query.limit)?;
    let filter = MovieFilter {
        genre: query.genre,
        year: query.year,
    };

    let total = Movie::count_filtered(&filter, &state.db_pool).await?;
    let movies = Movie::find_filtered(&filter, page, &state.db_pool).await?;

    let mut data = Vec::with_capacity(movies.len());
    for movie in movies {
        let reviews = Review::find_by_movie(movie.id, &state.db_pool).await?;
        data.push(MovieWithRating {
            movie: movie.into(),
            average_rating: average_rating(&reviews),
        });
    }

    Ok(Json(MovieListResponse {
        page: page.number(),
        total_pages: page.total_pages(total),
        data,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchMoviesQuery {
    pub title: Option<String>,
}

/// GET /movies/search?title=
pub async fn search_movies(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchMoviesQuery>,
) -> Result<Json<Vec<MovieData>>, ApiError> {
    let Some(title) = query.title.filter(|t| !t.is_empty()) else {
        return Err(ApiError::Validation(
            "Query parameter \"title\" is required".to_string(),
        ));
    };

    let movies = Movie::search_by_title(&title, &state.db_pool).await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    pub movie: MovieWithRating,
    pub reviews: Vec<ReviewData>,
}

/// GET /movies/:id — detail plus reviews plus average rating
pub async fn get_movie(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieDetailResponse>, ApiError> {
    let movie = Movie::find_by_id(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    let reviews = Review::find_by_movie(movie.id, &state.db_pool).await?;
    let rating = average_rating(&reviews);

    Ok(Json(MovieDetailResponse {
        movie: MovieWithRating {
            movie: movie.into(),
            average_rating: rating,
        },
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

/// POST /movies
pub async fn create_movie(
    Extension(state): Extension<AppState>,
    Json(input): Json<MovieInput>,
) -> Result<(StatusCode, Json<MovieData>), ApiError> {
    let (title, genre, release_year) = validate_required(&input)?;
    let movie = Movie::insert(title, genre, release_year, &input.details, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(movie.into())))
}

/// PUT /movies/:id — partial update, absent fields keep stored values
pub async fn update_movie(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<MovieInput>,
) -> Result<Json<MovieData>, ApiError> {
    let movie = Movie::update(id, &input, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    Ok(Json(movie.into()))
}

/// DELETE /movies/:id — admin only
pub async fn delete_movie(
    Extension(state): Extension<AppState>,
    caller: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    policy::can_delete_movie(&caller)?;

    if !Movie::delete(id, &state.db_pool).await? {
        return Err(ApiError::NotFound("Movie not found".to_string()));
    }

    Ok(Json(json!({ "message": "Movie deleted successfully" })))
}

fn validate_required(input: &MovieInput) -> Result<(&str, &str, i32), ApiError> {
    match (input.title.as_deref(), input.genre.as_deref(), input.release_year) {
        (Some(title), Some(genre), Some(year)) if !title.is_empty() && !genre.is_empty() => {
            Ok((title, genre, year))
        }
        _ => Err(ApiError::Validation("Missing required fields".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_accepts_full_input() {
        let input: MovieInput =
            serde_json::from_str(r#"{"title": "Inception", "genre": "Sci-Fi", "releaseYear": 2010}"#)
                .unwrap();
        let (title, genre, year) = validate_required(&input).unwrap();
        assert_eq!(title, "Inception");
        assert_eq!(genre, "Sci-Fi");
        assert_eq!(year, 2010);
    }

    #[test]
    fn test_validate_required_rejects_missing_fields() {
        let input: MovieInput =
            serde_json::from_str(r#"{"title": "Inception", "genre": "Sci-Fi"}"#).unwrap();
        assert!(validate_required(&input).is_err());

        let input: MovieInput = serde_json::from_str(r#"{}"#).unwrap();
        assert!(validate_required(&input).is_err());
    }

    #[test]
    fn test_validate_required_rejects_blank_strings() {
        let input: MovieInput =
            serde_json::from_str(r#"{"title": "", "genre": "Sci-Fi", "releaseYear": 2010}"#)
                .unwrap();
        assert!(validate_required(&input).is_err());
    }
}
