//! Resource lookup error types.

/// Resource lookup error.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// Subject or topic was empty; no request was sent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The search API answered with a non-success status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// Transport-level failure (connect, send, decode).
    #[error("failed to fetch resources: {0}")]
    Transport(String),
}

impl ResourceError {
    /// Create a transport error from any error type.
    #[inline]
    pub fn transport<E: std::fmt::Display>(err: E) -> Self {
        Self::Transport(err.to_string())
    }
}
