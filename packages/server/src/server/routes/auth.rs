//! Registration, login/logout, and the caller's own profile.

use axum::extract::Extension;
use axum::http::{header, StatusCode};
use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::auth::{password, policy, AuthUser};
use crate::domains::users::{Role, User, UserData};
use crate::server::app::AppState;
use crate::server::extract::Json;
use crate::server::middleware::TOKEN_COOKIE;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// POST /register
///
/// Requires an acting-identity token. Assigning any role other than
/// the default `user` is admin-only.
pub async fn register(
    Extension(state): Extension<AppState>,
    caller: AuthUser,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(username), Some(pass)) = (non_empty(body.username), non_empty(body.password)) else {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    };

    let role = match body.role.as_deref() {
        None => Role::User,
        Some(raw) => raw.parse::<Role>().map_err(ApiError::Validation)?,
    };
    policy::can_assign_role(&caller, role)?;

    if User::find_by_username(&username, &state.db_pool)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Username already exists".to_string()));
    }

    let password_hash = password::hash_password(&pass)?;
    let user = User::insert(&username, &password_hash, role, &state.db_pool).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "user": { "username": user.username, "role": user.role },
        })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /login
///
/// Verifies credentials and delivers the token via an HTTP-only,
/// same-site-lax cookie. Not marked Secure; that is a deployment
/// concern.
pub async fn login(
    Extension(state): Extension<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Value>), ApiError> {
    let (Some(username), Some(pass)) = (non_empty(body.username), non_empty(body.password)) else {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    };

    let user = User::find_by_username(&username, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if !password::verify_password(&user.password_hash, &pass) {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.jwt_service.create_token(user.id, user.role)?;
    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(1))
        .path("/")
        .build();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie.to_string())],
        Json(json!({ "message": "Login successful" })),
    ))
}

/// POST /logout
///
/// Clears the token cookie. Advisory only: issued tokens stay valid
/// until they expire.
pub async fn logout() -> ([(header::HeaderName, String); 1], Json<Value>) {
    let cookie = Cookie::build((TOKEN_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .path("/")
        .build();

    (
        [(header::SET_COOKIE, cookie.to_string())],
        Json(json!({ "message": "Logout successful" })),
    )
}

/// GET /current-user
pub async fn current_user(
    Extension(state): Extension<AppState>,
    caller: AuthUser,
) -> Result<Json<UserData>, ApiError> {
    let user = User::find_by_id(caller.id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_filters_blank_strings() {
        assert_eq!(non_empty(Some("bob".to_string())).as_deref(), Some("bob"));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_login_cookie_attributes() {
        let cookie = Cookie::build((TOKEN_COOKIE, "abc"))
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::hours(1))
            .path("/")
            .build();
        let rendered = cookie.to_string();
        assert!(rendered.starts_with("token=abc"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Max-Age=3600"));
        assert!(!rendered.contains("Secure"));
    }
}
