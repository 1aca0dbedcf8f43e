//! Configuration type definitions for server, database, session, resource
//! lookup, metrics, and logging.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address, e.g. 127.0.0.1:8080.
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (postgres://, mysql://, sqlite:). The literal `"memory"`
    /// selects the in-memory stores.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum pooled connections.
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    /// Pool acquire timeout in seconds.
    #[serde(default = "default_db_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_db_max_connections(),
            connect_timeout_secs: default_db_connect_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session cookie name.
    #[serde(default = "default_session_cookie")]
    pub cookie_name: String,
    /// Set the Secure attribute on the session cookie.
    #[serde(default = "default_session_secure")]
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_session_cookie(),
            secure: default_session_secure(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// External search endpoint URL.
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    /// Search API subscription key.
    #[serde(default)]
    pub api_key: String,
    /// Cap on returned resource links per lookup.
    #[serde(default = "default_search_max_results")]
    pub max_results: usize,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            api_key: String::new(),
            max_results: default_search_max_results(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetricsConfig {
    /// Prometheus exporter listen address (None = disabled).
    pub listen: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error).
    pub level: Option<String>,
    /// Output format (json, pretty, compact). Default: pretty
    pub format: Option<String>,
    /// Output target (stdout, stderr). Default: stderr
    pub output: Option<String>,
    /// Per-module log level overrides.
    #[serde(default)]
    pub filters: HashMap<String, String>,
}
