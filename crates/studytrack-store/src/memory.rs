//! In-memory mark store.

use std::sync::RwLock;

use async_trait::async_trait;
use studytrack_core::Marks;

use crate::StoreError;
use crate::record::MarkEntry;
use crate::traits::MarkStore;

/// Simple in-memory mark store.
///
/// Insertion order doubles as storage order, so `list` returns records in
/// the order they were submitted and `latest` is the last element.
#[derive(Debug, Default)]
pub struct MemoryMarks {
    entries: RwLock<Vec<MarkEntry>>,
}

impl MemoryMarks {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored entries across all users.
    pub fn len(&self) -> usize {
        self.entries.read().expect("mark store lock poisoned").len()
    }

    /// Check if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MarkStore for MemoryMarks {
    async fn insert(&self, username: &str, marks: &Marks) -> Result<MarkEntry, StoreError> {
        let entry = MarkEntry {
            id: uuid::Uuid::new_v4().simple().to_string(),
            username: username.to_owned(),
            marks: marks.clone(),
        };
        let mut entries = self.entries.write().map_err(StoreError::backend)?;
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: &str, username: &str, marks: &Marks) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(StoreError::backend)?;
        if let Some(entry) = entries
            .iter_mut()
            .find(|e| e.id == id && e.username == username)
        {
            entry.marks = marks.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &str, username: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().map_err(StoreError::backend)?;
        let before = entries.len();
        entries.retain(|e| !(e.id == id && e.username == username));
        Ok(entries.len() < before)
    }

    async fn list(&self, username: &str) -> Result<Vec<MarkEntry>, StoreError> {
        let entries = self.entries.read().map_err(StoreError::backend)?;
        Ok(entries
            .iter()
            .filter(|e| e.username == username)
            .cloned()
            .collect())
    }

    async fn latest(&self, username: &str) -> Result<Option<MarkEntry>, StoreError> {
        let entries = self.entries.read().map_err(StoreError::backend)?;
        Ok(entries
            .iter()
            .rev()
            .find(|e| e.username == username)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(math: i64, science: i64) -> Marks {
        Marks {
            math,
            science,
            ..Marks::default()
        }
    }

    #[tokio::test]
    async fn test_insert_then_list_returns_exactly_what_was_submitted() {
        let store = MemoryMarks::new();
        let submitted = Marks {
            math: 90,
            science: 85,
            social: 70,
            computer: 95,
            gk: 60,
        };

        store.insert("alice", &submitted).await.unwrap();

        let listed = store.list("alice").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].marks, submitted);
    }

    #[tokio::test]
    async fn test_insert_never_merges() {
        let store = MemoryMarks::new();
        store.insert("alice", &marks(10, 20)).await.unwrap();
        store.insert("alice", &marks(30, 40)).await.unwrap();

        assert_eq!(store.list("alice").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_mapping_and_misses_silently() {
        let store = MemoryMarks::new();
        let entry = store.insert("alice", &marks(10, 20)).await.unwrap();

        store.update(&entry.id, "alice", &marks(50, 60)).await.unwrap();
        let listed = store.list("alice").await.unwrap();
        assert_eq!(listed[0].marks.math, 50);

        // Wrong owner and unknown id are both silent no-ops.
        store.update(&entry.id, "bob", &marks(0, 0)).await.unwrap();
        store.update("missing", "alice", &marks(0, 0)).await.unwrap();
        assert_eq!(store.list("alice").await.unwrap()[0].marks.math, 50);
    }

    #[tokio::test]
    async fn test_delete_is_owner_filtered() {
        let store = MemoryMarks::new();
        let entry = store.insert("alice", &marks(10, 20)).await.unwrap();

        assert!(!store.delete(&entry.id, "bob").await.unwrap());
        assert_eq!(store.list("alice").await.unwrap().len(), 1);

        assert!(store.delete(&entry.id, "alice").await.unwrap());
        assert!(store.list("alice").await.unwrap().is_empty());
        assert!(!store.delete(&entry.id, "alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_latest_is_most_recent_submission() {
        let store = MemoryMarks::new();
        assert!(store.latest("alice").await.unwrap().is_none());

        store.insert("alice", &marks(10, 20)).await.unwrap();
        let second = store.insert("alice", &marks(30, 40)).await.unwrap();
        store.insert("bob", &marks(99, 99)).await.unwrap();

        let latest = store.latest("alice").await.unwrap().unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(latest.marks.math, 30);
    }
}
