use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::Page;
use crate::domains::movies::data::MovieInput;

/// Optional descriptive movie fields, all free-form strings.
///
/// Shared between the SQL model and the request/response types via
/// `#[sqlx(flatten)]` / `#[serde(flatten)]`.
#[derive(sqlx::FromRow, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub description: Option<String>,
    pub actors: Option<String>,
    pub cover_image: Option<String>,
    pub production_year: Option<String>,
    pub country: Option<String>,
    pub slogan: Option<String>,
    pub director: Option<String>,
    pub screenwriters: Option<String>,
    pub producers: Option<String>,
    pub operator: Option<String>,
    pub composer: Option<String>,
    pub artist: Option<String>,
    pub editor: Option<String>,
    pub budget: Option<String>,
    pub premiere: Option<String>,
    pub mpaa_rating: Option<String>,
    pub duration: Option<String>,
}

/// Movie model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    #[sqlx(flatten)]
    pub details: MovieDetails,
    pub created_at: DateTime<Utc>,
}

/// Optional exact-match filters for the movie listing
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl Movie {
    /// Find movie by ID
    pub async fn find_by_id(id: i32, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find one page of movies matching the filter, in insertion order
    pub async fn find_filtered(
        filter: &MovieFilter,
        page: Page,
        pool: &PgPool,
    ) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM movies
             WHERE ($1::text IS NULL OR lower(genre) = lower($1))
               AND ($2::int4 IS NULL OR release_year = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4",
        )
        .bind(&filter.genre)
        .bind(filter.year)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await
    }

    /// Count movies matching the filter (for the total page count)
    pub async fn count_filtered(filter: &MovieFilter, pool: &PgPool) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM movies
             WHERE ($1::text IS NULL OR lower(genre) = lower($1))
               AND ($2::int4 IS NULL OR release_year = $2)",
        )
        .bind(&filter.genre)
        .bind(filter.year)
        .fetch_one(pool)
        .await
    }

    /// Case-insensitive substring search on title
    pub async fn search_by_title(title: &str, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM movies WHERE title ILIKE '%' || $1 || '%' ORDER BY id",
        )
        .bind(title)
        .fetch_all(pool)
        .await
    }

    /// Insert a new movie
    pub async fn insert(
        title: &str,
        genre: &str,
        release_year: i32,
        details: &MovieDetails,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO movies (
                title, genre, release_year,
                description, actors, cover_image, production_year, country,
                slogan, director, screenwriters, producers, operator,
                composer, artist, editor, budget, premiere, mpaa_rating, duration
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
             RETURNING *",
        )
        .bind(title)
        .bind(genre)
        .bind(release_year)
        .bind(&details.description)
        .bind(&details.actors)
        .bind(&details.cover_image)
        .bind(&details.production_year)
        .bind(&details.country)
        .bind(&details.slogan)
        .bind(&details.director)
        .bind(&details.screenwriters)
        .bind(&details.producers)
        .bind(&details.operator)
        .bind(&details.composer)
        .bind(&details.artist)
        .bind(&details.editor)
        .bind(&details.budget)
        .bind(&details.premiere)
        .bind(&details.mpaa_rating)
        .bind(&details.duration)
        .fetch_one(pool)
        .await
    }

    /// Partial update: fields absent from the input keep their stored
    /// values. Returns None when the movie does not exist.
    pub async fn update(id: i32, input: &MovieInput, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE movies SET
                title = COALESCE($2, title),
                genre = COALESCE($3, genre),
                release_year = COALESCE($4, release_year),
                description = COALESCE($5, description),
                actors = COALESCE($6, actors),
                cover_image = COALESCE($7, cover_image),
                production_year = COALESCE($8, production_year),
                country = COALESCE($9, country),
                slogan = COALESCE($10, slogan),
                director = COALESCE($11, director),
                screenwriters = COALESCE($12, screenwriters),
                producers = COALESCE($13, producers),
                operator = COALESCE($14, operator),
                composer = COALESCE($15, composer),
                artist = COALESCE($16, artist),
                editor = COALESCE($17, editor),
                budget = COALESCE($18, budget),
                premiere = COALESCE($19, premiere),
                mpaa_rating = COALESCE($20, mpaa_rating),
                duration = COALESCE($21, duration)
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.genre)
        .bind(input.release_year)
        .bind(&input.details.description)
        .bind(&input.details.actors)
        .bind(&input.details.cover_image)
        .bind(&input.details.production_year)
        .bind(&input.details.country)
        .bind(&input.details.slogan)
        .bind(&input.details.director)
        .bind(&input.details.screenwriters)
        .bind(&input.details.producers)
        .bind(&input.details.operator)
        .bind(&input.details.composer)
        .bind(&input.details.artist)
        .bind(&input.details.editor)
        .bind(&input.details.budget)
        .bind(&input.details.premiere)
        .bind(&input.details.mpaa_rating)
        .bind(&input.details.duration)
        .fetch_optional(pool)
        .await
    }

    /// Delete a movie; returns false when it did not exist
    pub async fn delete(id: i32, pool: &PgPool) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
