//! Credential store and login verification for studytrack.
//!
//! This crate owns user identity records (username, email, salted password
//! hash) and the signup/login flow on top of them.
//!
//! # Example
//!
//! ```
//! use studytrack_auth::{CredentialAuth, MemoryUsers};
//!
//! # async fn example() -> Result<(), studytrack_auth::AuthError> {
//! let auth = CredentialAuth::new(MemoryUsers::new());
//!
//! auth.signup("alice", "alice@example.com", "hunter2!").await?;
//! let user = auth.login("alice", "hunter2!").await?;
//! assert_eq!(user.email, "alice@example.com");
//! # Ok(())
//! # }
//! ```

mod auth;
mod error;
mod hash;
mod memory;
mod record;
pub mod sql;
mod traits;

pub use auth::CredentialAuth;
pub use error::AuthError;
pub use hash::{hash_password, verify_password};
pub use memory::MemoryUsers;
pub use record::UserRecord;
pub use traits::UserStore;
