//! Configuration validation logic.

use std::net::SocketAddr;

use studytrack_core::db::DatabaseType;

use crate::Config;
use crate::loader::ConfigError;

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.listen.trim().is_empty() {
        return Err(ConfigError::Validation("server.listen is empty".into()));
    }
    if config.server.listen.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::Validation(format!(
            "server.listen is not a socket address: {}",
            config.server.listen
        )));
    }
    if config.database.url.trim().is_empty() {
        return Err(ConfigError::Validation("database.url is empty".into()));
    }
    if config.database.url != "memory" && DatabaseType::from_url(&config.database.url).is_none() {
        return Err(ConfigError::Validation(format!(
            "database.url has an unsupported scheme: {}",
            config.database.url
        )));
    }
    if config.database.max_connections == 0 {
        return Err(ConfigError::Validation(
            "database.max_connections must be > 0".into(),
        ));
    }
    if config.database.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "database.connect_timeout_secs must be > 0".into(),
        ));
    }
    if config.session.cookie_name.trim().is_empty() {
        return Err(ConfigError::Validation("session.cookie_name is empty".into()));
    }
    if config.resources.endpoint.trim().is_empty() {
        return Err(ConfigError::Validation("resources.endpoint is empty".into()));
    }
    if config.resources.max_results == 0 {
        return Err(ConfigError::Validation(
            "resources.max_results must be > 0".into(),
        ));
    }
    if let Some(ref listen) = config.metrics.listen
        && listen.parse::<SocketAddr>().is_err()
    {
        return Err(ConfigError::Validation(format!(
            "metrics.listen is not a socket address: {listen}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        validate_config(&Config::default()).unwrap();
    }

    #[test]
    fn test_memory_database_url_is_accepted() {
        let mut config = Config::default();
        config.database.url = "memory".into();
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_bad_listen_rejected() {
        let mut config = Config::default();
        config.server.listen = "not-an-address".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unsupported_database_scheme_rejected() {
        let mut config = Config::default();
        config.database.url = "mongodb://localhost/studytrack".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let mut config = Config::default();
        config.resources.max_results = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_bad_metrics_listen_rejected() {
        let mut config = Config::default();
        config.metrics.listen = Some("nope".into());
        assert!(validate_config(&config).is_err());
    }
}
