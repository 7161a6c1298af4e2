//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::auth::JwtService;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    create_movie, create_review, current_user, delete_movie, delete_review, get_movie,
    health_handler, list_movies, list_reviews, login, logout, movie_average_rating, register,
    search_movies, update_movie,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
///
/// All handlers read shared state via `Extension(AppState)`; the JWT
/// middleware records the authentication outcome for every request and
/// protected routes enforce it through the `AuthUser` extractor.
pub fn build_app(pool: PgPool, config: &Config) -> Result<Router> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
    ));

    let app_state = AppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
    };

    // CORS: the browser frontend sends the token cookie, so the origin
    // must be exact and credentials allowed.
    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .context("FRONTEND_ORIGIN is not a valid header value")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    // Clone jwt_service for middleware closure
    let jwt_service_for_middleware = jwt_service.clone();

    let app = Router::new()
        // Accounts and sessions
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/current-user", get(current_user))
        // Catalogue
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/search", get(search_movies))
        .route(
            "/movies/:id",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        // Reviews and aggregates
        .route(
            "/movies/:id/reviews",
            get(list_reviews).post(create_review),
        )
        .route("/movies/:id/average-rating", get(movie_average_rating))
        .route("/reviews/:id", delete(delete_review))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
