//! Configuration loading and CLI definitions for studytrack.
//!
//! Config files are json/jsonc/yaml/toml, selected by extension. Every
//! section and field has a default, so an empty file is a valid config;
//! CLI overrides are applied on top and the result is validated once at
//! startup.

mod cli;
mod defaults;
mod loader;
mod types;
mod validate;

pub use cli::{CliOverrides, apply_overrides};
pub use loader::{ConfigError, load_config};
pub use types::{
    Config, DatabaseConfig, LoggingConfig, MetricsConfig, ResourcesConfig, ServerConfig,
    SessionConfig,
};
pub use validate::validate_config;
