//! Signup/login flow over a user store.
//!
//! [`CredentialAuth<S>`] wraps any [`UserStore`] implementation and provides:
//! - Field validation (empty username/email/password)
//! - Duplicate detection via a single existence query
//! - Salted password hashing on signup
//! - Constant-time verification on login with a single generic failure

use tracing::debug;

use crate::error::AuthError;
use crate::hash::{hash_password, verify_password};
use crate::record::UserRecord;
use crate::traits::UserStore;

/// Signup and login on top of a [`UserStore`].
///
/// New backends only need to implement [`UserStore`] (data access).
///
/// # Type parameter
///
/// - `S` — the underlying user store (e.g. `SqlUsers`)
pub struct CredentialAuth<S> {
    store: S,
}

impl<S: UserStore> CredentialAuth<S> {
    /// Create a new `CredentialAuth` wrapping the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new user.
    ///
    /// Fails when any field is empty or when a user with the same username
    /// or email already exists. The password is stored as a salted one-way
    /// hash; the plaintext is never persisted or logged.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, AuthError> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        if self.store.exists(username, email).await? {
            return Err(AuthError::Duplicate);
        }

        let password_hash = hash_password(password)?;
        let record = self.store.insert(username, email, &password_hash).await?;
        debug!(username, "user registered");
        Ok(record)
    }

    /// Verify credentials and return the matching user.
    ///
    /// An identifier containing `'@'` is looked up by email, otherwise by
    /// username. Unknown identifier and wrong password both return
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, identifier: &str, password: &str) -> Result<UserRecord, AuthError> {
        let identifier = identifier.trim();

        if identifier.is_empty() {
            return Err(AuthError::MissingField("identifier"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let user = if identifier.contains('@') {
            self.store.find_by_email(identifier).await?
        } else {
            self.store.find_by_username(identifier).await?
        };

        match user {
            Some(user) if verify_password(password, &user.password_hash) => {
                debug!(username = %user.username, "login verified");
                Ok(user)
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for CredentialAuth<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialAuth")
            .field("store", &self.store)
            .finish()
    }
}
