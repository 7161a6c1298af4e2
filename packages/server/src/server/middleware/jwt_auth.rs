use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::{middleware::Next, response::Response};
use cookie::Cookie;
use std::sync::Arc;
use tracing::debug;

use crate::common::ApiError;
use crate::domains::auth::{AuthError, AuthUser, JwtService};

/// Name of the cookie carrying the token
pub const TOKEN_COOKIE: &str = "token";

/// Outcome of token extraction for the current request.
///
/// Recorded for every request so protected routes can report a
/// missing cookie and a failed verification as distinct 401s.
#[derive(Clone, Debug)]
pub enum AuthAttempt {
    Missing,
    Invalid,
    Valid(AuthUser),
}

/// JWT authentication middleware
///
/// Reads the token cookie, verifies it, and records the outcome in
/// request extensions. Requests without a valid token continue as
/// anonymous; enforcement happens per-route via the `AuthUser`
/// extractor.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let attempt = authenticate(&request, &jwt_service);

    if let AuthAttempt::Valid(user) = &attempt {
        debug!("Authenticated user {} ({})", user.id, user.role);
    }
    request.extensions_mut().insert(attempt);

    next.run(request).await
}

/// Extract and verify the token cookie from a request
fn authenticate(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> AuthAttempt {
    let Some(token) = token_cookie(request) else {
        return AuthAttempt::Missing;
    };

    match jwt_service.verify_token(&token) {
        Ok(claims) => AuthAttempt::Valid(AuthUser {
            id: claims.user_id,
            role: claims.role,
        }),
        Err(_) => AuthAttempt::Invalid,
    }
}

/// Find the token cookie among the request's Cookie headers
fn token_cookie(request: &axum::http::Request<axum::body::Body>) -> Option<String> {
    for header in request.headers().get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for cookie in Cookie::split_parse(raw).flatten() {
            if cookie.name() == TOKEN_COOKIE {
                return Some(cookie.value().to_string());
            }
        }
    }
    None
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthAttempt>() {
            Some(AuthAttempt::Valid(user)) => Ok(*user),
            Some(AuthAttempt::Invalid) => Err(AuthError::InvalidToken.into()),
            _ => Err(AuthError::MissingToken.into()),
        }
    }
}
