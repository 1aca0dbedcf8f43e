//! Password hashing utilities.

use bcrypt::DEFAULT_COST;

use crate::error::AuthError;

/// Hash a plaintext password with a per-hash random salt.
///
/// # Example
/// ```
/// use studytrack_auth::{hash_password, verify_password};
///
/// let hashed = hash_password("hunter2!").unwrap();
/// assert!(verify_password("hunter2!", &hashed));
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, DEFAULT_COST).map_err(AuthError::backend)
}

/// Verify a plaintext password against a stored hash.
///
/// Uses bcrypt's constant-time comparison. A malformed stored hash verifies
/// as false rather than erroring.
#[inline]
pub fn verify_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_password() {
        let hashed = bcrypt::hash("test123", 4).unwrap();
        assert!(verify_password("test123", &hashed));
        assert!(!verify_password("wrong", &hashed));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = bcrypt::hash("same password", 4).unwrap();
        let b = bcrypt::hash("same password", 4).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_not_an_error() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}
