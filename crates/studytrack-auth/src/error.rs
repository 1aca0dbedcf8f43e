//! Authentication error types.

/// Authentication error.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Generic login failure. Unknown identifier and wrong password both
    /// map here so the outcome does not reveal which one it was.
    #[error("invalid username/email or password")]
    InvalidCredentials,

    /// A required signup/login field was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A user with the same username or email already exists.
    #[error("user already exists")]
    Duplicate,

    /// Backend error (database, hashing, etc.).
    #[error("backend error: {0}")]
    Backend(String),
}

impl AuthError {
    /// Create a backend error from any error type.
    #[inline]
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
