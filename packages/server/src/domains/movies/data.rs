use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::movies::models::{Movie, MovieDetails};

/// Public API representation of a movie
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieData {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    #[serde(flatten)]
    pub details: MovieDetails,
    pub created_at: DateTime<Utc>,
}

impl From<Movie> for MovieData {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            genre: movie.genre,
            release_year: movie.release_year,
            details: movie.details,
            created_at: movie.created_at,
        }
    }
}

/// A movie plus its derived aggregate rating, as rendered in the
/// listing and detail endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieWithRating {
    #[serde(flatten)]
    pub movie: MovieData,
    pub average_rating: f64,
}

/// Request body for movie create and update.
///
/// Everything is optional at the serde level; create validates the
/// required trio (title, genre, releaseYear) before persistence,
/// update treats absent fields as "keep stored value".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieInput {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    #[serde(flatten)]
    pub details: MovieDetails,
}
