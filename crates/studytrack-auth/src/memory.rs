//! In-memory user store.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::AuthError;
use crate::record::UserRecord;
use crate::traits::UserStore;

/// Simple in-memory user store.
///
/// Suitable for small deployments and tests. For durable user management,
/// use the database-backed [`SqlUsers`](crate::sql::SqlUsers).
#[derive(Debug, Default)]
pub struct MemoryUsers {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryUsers {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of registered users.
    pub fn len(&self) -> usize {
        self.users.read().expect("user store lock poisoned").len()
    }

    /// Check if no users are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryUsers {
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, AuthError> {
        let record = UserRecord {
            id: uuid::Uuid::new_v4().simple().to_string(),
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
        };
        let mut users = self.users.write().map_err(AuthError::backend)?;
        users.push(record.clone());
        Ok(record)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AuthError> {
        let users = self.users.read().map_err(AuthError::backend)?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        let users = self.users.read().map_err(AuthError::backend)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn exists(&self, username: &str, email: &str) -> Result<bool, AuthError> {
        let users = self.users.read().map_err(AuthError::backend)?;
        Ok(users
            .iter()
            .any(|u| u.username == username || u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = MemoryUsers::new();
        assert!(store.is_empty());

        let record = store.insert("alice", "alice@example.com", "hash").await.unwrap();
        assert!(!record.id.is_empty());
        assert_eq!(store.len(), 1);

        let by_name = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.email, "alice@example.com");

        let by_email = store.find_by_email("alice@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.username, "alice");

        assert!(store.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_matches_either_field() {
        let store = MemoryUsers::new();
        store.insert("alice", "alice@example.com", "hash").await.unwrap();

        assert!(store.exists("alice", "other@example.com").await.unwrap());
        assert!(store.exists("other", "alice@example.com").await.unwrap());
        assert!(!store.exists("other", "other@example.com").await.unwrap());
    }
}
