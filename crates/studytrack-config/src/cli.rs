//! Command-line overrides applied on top of the config file.

use clap::Parser;

use crate::Config;

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override HTTP listen address, e.g. 0.0.0.0:8080
    #[arg(long)]
    pub listen: Option<String>,
    /// Override database URL (postgres://, mysql://, sqlite:, or "memory")
    #[arg(long)]
    pub database_url: Option<String>,
    /// Override maximum pooled database connections
    #[arg(long)]
    pub db_max_connections: Option<u32>,
    /// Override session cookie name
    #[arg(long)]
    pub session_cookie: Option<String>,
    /// Override the Secure attribute on the session cookie
    #[arg(long)]
    pub session_secure: Option<bool>,
    /// Override search endpoint URL
    #[arg(long)]
    pub resources_endpoint: Option<String>,
    /// Override search API subscription key
    #[arg(long)]
    pub resources_api_key: Option<String>,
    /// Override cap on returned resource links
    #[arg(long)]
    pub resources_max_results: Option<usize>,
    /// Override metrics listen address
    #[arg(long)]
    pub metrics_listen: Option<String>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.listen {
        config.server.listen = v.clone();
    }
    if let Some(v) = &overrides.database_url {
        config.database.url = v.clone();
    }
    if let Some(v) = overrides.db_max_connections {
        config.database.max_connections = v;
    }
    if let Some(v) = &overrides.session_cookie {
        config.session.cookie_name = v.clone();
    }
    if let Some(v) = overrides.session_secure {
        config.session.secure = v;
    }
    if let Some(v) = &overrides.resources_endpoint {
        config.resources.endpoint = v.clone();
    }
    if let Some(v) = &overrides.resources_api_key {
        config.resources.api_key = v.clone();
    }
    if let Some(v) = overrides.resources_max_results {
        config.resources.max_results = v;
    }
    if let Some(v) = &overrides.metrics_listen {
        config.metrics.listen = Some(v.clone());
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut config = Config::default();
        let overrides = CliOverrides {
            listen: Some("0.0.0.0:9999".into()),
            database_url: Some("memory".into()),
            log_level: Some("debug".into()),
            ..CliOverrides::default()
        };

        apply_overrides(&mut config, &overrides);

        assert_eq!(config.server.listen, "0.0.0.0:9999");
        assert_eq!(config.database.url, "memory");
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let mut config = Config::default();
        let before = config.server.listen.clone();

        apply_overrides(&mut config, &CliOverrides::default());

        assert_eq!(config.server.listen, before);
        assert!(config.logging.level.is_none());
    }
}
