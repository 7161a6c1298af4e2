pub mod jwt;
pub mod password;
pub mod policy;

use thiserror::Error;

use crate::common::ApiError;
use crate::domains::users::Role;

/// Authenticated caller identity extracted from a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub role: Role,
}

/// Authentication failures: absent vs. failed verification.
///
/// Both map to 401, but the outcomes stay distinct so clients can tell
/// a missing cookie from a stale or tampered one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Access token is missing")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

pub use jwt::{Claims, JwtService};
