//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use api_core::domains::auth::password;
use api_core::domains::movies::{Movie, MovieDetails};
use api_core::domains::users::{Role, User};
use sqlx::PgPool;

/// Create a user with a known password (`"fixture-password"`).
pub async fn create_test_user(pool: &PgPool, username: &str, role: Role) -> Result<User> {
    let password_hash = password::hash_password("fixture-password")?;
    let user = User::insert(username, &password_hash, role, pool).await?;
    Ok(user)
}

/// Create a movie with only the required fields set.
pub async fn create_test_movie(
    pool: &PgPool,
    title: &str,
    genre: &str,
    release_year: i32,
) -> Result<Movie> {
    let movie = Movie::insert(title, genre, release_year, &MovieDetails::default(), pool).await?;
    Ok(movie)
}
