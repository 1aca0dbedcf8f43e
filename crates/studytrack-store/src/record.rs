//! Persisted mark submission record.

use serde::Serialize;
use studytrack_core::Marks;

/// One mark submission event.
///
/// `username` is a foreign key by value only; nothing at the storage level
/// ties it to the user table. It is omitted from serialized output — the
/// JSON endpoints return `{id, marks}` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkEntry {
    /// Store-generated opaque identifier.
    pub id: String,
    /// Owning username.
    #[serde(skip_serializing)]
    pub username: String,
    /// Scores for the five fixed subjects.
    pub marks: Marks,
}
