//! Data-access trait for mark stores.

use std::sync::Arc;

use async_trait::async_trait;
use studytrack_core::Marks;

use crate::StoreError;
use crate::record::MarkEntry;

/// Data-access layer for mark submission records.
///
/// `update` and `delete` take the owning username alongside the id and must
/// match both; a non-owned or missing record is a no-op, not an error.
#[async_trait]
pub trait MarkStore: Send + Sync {
    /// Persist a new submission event. Always inserts; never merges into an
    /// existing record.
    async fn insert(&self, username: &str, marks: &Marks) -> Result<MarkEntry, StoreError>;

    /// Replace the marks mapping of the record matching `(id, username)`.
    /// Silently does nothing when no record matches.
    async fn update(&self, id: &str, username: &str, marks: &Marks) -> Result<(), StoreError>;

    /// Remove the record matching `(id, username)`. Returns whether a record
    /// was actually removed.
    async fn delete(&self, id: &str, username: &str) -> Result<bool, StoreError>;

    /// All records for a username, in storage order.
    async fn list(&self, username: &str) -> Result<Vec<MarkEntry>, StoreError>;

    /// The most recently inserted record for a username, if any.
    async fn latest(&self, username: &str) -> Result<Option<MarkEntry>, StoreError>;
}

#[async_trait]
impl<T: MarkStore + ?Sized> MarkStore for Arc<T> {
    async fn insert(&self, username: &str, marks: &Marks) -> Result<MarkEntry, StoreError> {
        (**self).insert(username, marks).await
    }

    async fn update(&self, id: &str, username: &str, marks: &Marks) -> Result<(), StoreError> {
        (**self).update(id, username, marks).await
    }

    async fn delete(&self, id: &str, username: &str) -> Result<bool, StoreError> {
        (**self).delete(id, username).await
    }

    async fn list(&self, username: &str) -> Result<Vec<MarkEntry>, StoreError> {
        (**self).list(username).await
    }

    async fn latest(&self, username: &str) -> Result<Option<MarkEntry>, StoreError> {
        (**self).latest(username).await
    }
}
