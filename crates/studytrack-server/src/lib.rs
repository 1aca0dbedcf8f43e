//! Studytrack HTTP server library.
//!
//! This module exposes the router and shared state for use by integration
//! tests and potential embedding scenarios.

pub mod cli;
mod error;
mod handlers;
mod routes;
mod session;
mod state;

pub use cli::ServerArgs;
pub use error::AppError;
pub use routes::router;
pub use session::{CurrentUser, SESSION_USERNAME_KEY};
pub use state::AppState;
