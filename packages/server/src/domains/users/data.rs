use serde::{Deserialize, Serialize};

use crate::domains::users::models::{Role, User};

/// Public API representation of a user (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
