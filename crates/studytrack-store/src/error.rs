//! Mark store error types.

/// Mark store error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend error (database, serialization, etc.).
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error from any error type.
    #[inline]
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
