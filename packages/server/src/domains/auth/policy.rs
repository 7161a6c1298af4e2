//! Access policy: the per-operation authorization rules, in one place
//! instead of scattered role checks in handlers.

use crate::common::ApiError;
use crate::domains::auth::AuthUser;
use crate::domains::users::Role;

/// Only admins may assign a role other than the default `user`.
pub fn can_assign_role(caller: &AuthUser, requested: Role) -> Result<(), ApiError> {
    if requested != Role::User && caller.role != Role::Admin {
        return Err(ApiError::Forbidden(
            "Only admins can assign roles".to_string(),
        ));
    }
    Ok(())
}

/// Movie deletion is admin-only.
pub fn can_delete_movie(caller: &AuthUser) -> Result<(), ApiError> {
    if caller.role != Role::Admin {
        return Err(ApiError::Forbidden(
            "Only admins can delete movies".to_string(),
        ));
    }
    Ok(())
}

/// A review may be deleted by its owner or by an admin.
pub fn can_delete_review(caller: &AuthUser, owner_id: i32) -> Result<(), ApiError> {
    if caller.role != Role::Admin && caller.id != owner_id {
        return Err(ApiError::Forbidden(
            "You can only delete your own reviews".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32) -> AuthUser {
        AuthUser {
            id,
            role: Role::User,
        }
    }

    fn admin(id: i32) -> AuthUser {
        AuthUser {
            id,
            role: Role::Admin,
        }
    }

    #[test]
    fn test_default_role_needs_no_privilege() {
        assert!(can_assign_role(&user(1), Role::User).is_ok());
        assert!(can_assign_role(&admin(1), Role::User).is_ok());
    }

    #[test]
    fn test_only_admin_assigns_admin_role() {
        assert!(can_assign_role(&user(1), Role::Admin).is_err());
        assert!(can_assign_role(&admin(1), Role::Admin).is_ok());
    }

    #[test]
    fn test_movie_deletion_is_admin_only() {
        assert!(can_delete_movie(&user(1)).is_err());
        assert!(can_delete_movie(&admin(1)).is_ok());
    }

    #[test]
    fn test_review_deletion_owner_or_admin() {
        // Owner may delete their own review
        assert!(can_delete_review(&user(7), 7).is_ok());
        // A different non-admin user may not
        assert!(can_delete_review(&user(8), 7).is_err());
        // An admin may delete anyone's review
        assert!(can_delete_review(&admin(1), 7).is_ok());
    }

    #[test]
    fn test_violations_are_forbidden_not_unauthorized() {
        let err = can_delete_movie(&user(1)).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}
