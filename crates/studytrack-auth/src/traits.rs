//! Data-access trait for user stores.

use std::sync::Arc;

use async_trait::async_trait;

use crate::AuthError;
use crate::record::UserRecord;

/// Data-access layer for user identity records.
///
/// Implementations provide only storage and lookup. Validation (empty
/// fields, duplicate detection ordering, password verification) is handled
/// by [`CredentialAuth`](crate::CredentialAuth), which wraps a `UserStore`.
///
/// Return `Ok(None)` from the lookups when nothing matches —
/// `CredentialAuth` maps this to [`AuthError::InvalidCredentials`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user and return the stored record with its
    /// store-generated id.
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, AuthError>;

    /// Look up a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AuthError>;

    /// Look up a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError>;

    /// Single existence check matching either username or email.
    async fn exists(&self, username: &str, email: &str) -> Result<bool, AuthError>;
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, AuthError> {
        (**self).insert(username, email, password_hash).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AuthError> {
        (**self).find_by_username(username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        (**self).find_by_email(email).await
    }

    async fn exists(&self, username: &str, email: &str) -> Result<bool, AuthError> {
        (**self).exists(username, email).await
    }
}
