//! Universal user record from any store.

/// User identity data returned by a [`UserStore`](crate::UserStore)
/// implementation.
///
/// Created at signup and never mutated. `password_hash` is a salted bcrypt
/// hash; the plaintext is never persisted.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Store-generated opaque identifier.
    pub id: String,
    /// Unique username.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Salted one-way password hash.
    pub password_hash: String,
}
