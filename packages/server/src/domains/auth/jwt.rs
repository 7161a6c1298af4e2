use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::auth::AuthError;
use crate::domains::users::Role;

/// Token lifetime; revocation before expiry is impossible by design,
/// a cleared cookie is advisory only.
const TOKEN_TTL_HOURS: i64 = 1;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,  // Subject (user id as string)
    pub user_id: i32, // User surrogate key
    pub role: Role,   // Coarse permission tier
    pub exp: i64,     // Expiration timestamp
    pub iat: i64,     // Issued at timestamp
    pub iss: String,  // Issuer
    pub jti: String,  // JWT ID (unique token identifier)
}

/// JWT Service - creates and verifies signed, time-limited tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a new token asserting `user_id` and `role`
    ///
    /// Token expires after 1 hour.
    pub fn create_token(&self, user_id: i32, role: Role) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::hours(TOKEN_TTL_HOURS);

        let claims = Claims {
            sub: user_id.to_string(),
            user_id,
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token
    ///
    /// Any signature, expiry, or issuer failure collapses to
    /// `InvalidToken`.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test_secret_key", "test_issuer".to_string())
    }

    #[test]
    fn test_create_and_verify_token() {
        let service = service();

        let token = service.create_token(42, Role::Admin).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn test_invalid_token() {
        let result = service().verify_token("invalid_token");
        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new("secret1", "test_issuer".to_string());
        let service2 = JwtService::new("secret2", "test_issuer".to_string());

        let token = service1.create_token(1, Role::User).unwrap();
        assert!(service2.verify_token(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer() {
        let service1 = JwtService::new("secret", "issuer_a".to_string());
        let service2 = JwtService::new("secret", "issuer_b".to_string());

        let token = service1.create_token(1, Role::User).unwrap();
        assert_eq!(
            service2.verify_token(&token).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn test_token_ttl_is_one_hour() {
        let token = service().create_token(1, Role::User).unwrap();
        let claims = service().verify_token(&token).unwrap();

        let now = chrono::Utc::now().timestamp();
        let expires_in = claims.exp - now;
        assert!(expires_in > 3500);
        assert!(expires_in <= 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();

        // Hand-roll claims two hours in the past, past the default
        // validation leeway, signed with the same key.
        let issued = chrono::Utc::now() - chrono::Duration::hours(3);
        let claims = Claims {
            sub: "1".to_string(),
            user_id: 1,
            role: Role::User,
            exp: (issued + chrono::Duration::hours(1)).timestamp(),
            iat: issued.timestamp(),
            iss: "test_issuer".to_string(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret_key"),
        )
        .unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
