//! Password hashing via argon2id in PHC string format.

use anyhow::{anyhow, Result};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes).map_err(|e| anyhow!(e.to_string()))?;
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| anyhow!(e.to_string()))?;
    let argon2 = Argon2::default();
    let phc = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!(e.to_string()))?
        .to_string();
    Ok(phc)
}

/// Verify a plaintext password against a stored PHC hash
///
/// An unparseable hash verifies as false rather than erroring.
pub fn verify_password(hash: &str, password: &str) -> bool {
    if let Ok(parsed) = PasswordHash::new(hash) {
        let argon2 = Argon2::default();
        argon2.verify_password(password.as_bytes(), &parsed).is_ok()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "hunter2"));
        assert!(!verify_password(&hash, "hunter3"));
    }

    #[test]
    fn test_same_password_different_hashes() {
        let hash1 = hash_password("hunter2").unwrap();
        let hash2 = hash_password("hunter2").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_password("not-a-phc-string", "hunter2"));
        assert!(!verify_password("", "hunter2"));
    }
}
