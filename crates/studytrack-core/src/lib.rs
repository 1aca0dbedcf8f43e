//! Core types and constants shared across studytrack crates.
//!
//! This crate provides:
//! - The fixed subject set and per-subject marks mapping
//! - Default configuration values
//! - Shared plumbing for the SQL-backed stores

pub mod db;
pub mod defaults;
pub mod subject;

pub use subject::{Marks, Subject, coerce_score};

/// Project name.
pub const PROJECT_NAME: &str = "studytrack";
/// Project version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
