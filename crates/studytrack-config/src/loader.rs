//! Configuration file loading and error types.

use std::{fs, path::Path};

use crate::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format")]
    UnsupportedFormat,
    #[error("validation: {0}")]
    Validation(String),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
        "json" | "jsonc" => {
            let stripped = json_comments::StripComments::new(data.as_bytes());
            Ok(serde_json::from_reader(stripped)?)
        }
        "yaml" | "yml" => Ok(serde_yaml::from_str(&data)?),
        "toml" => Ok(toml::from_str(&data)?),
        _ => Err(ConfigError::UnsupportedFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(ext: &str, contents: &str) -> tempfile::TempPath {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.into_temp_path()
    }

    #[test]
    fn test_load_toml() {
        let path = write_config(
            "toml",
            r#"
[server]
listen = "0.0.0.0:9000"

[database]
url = "memory"
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:9000");
        assert_eq!(config.database.url, "memory");
        // Untouched sections fall back to defaults.
        assert_eq!(config.resources.max_results, 5);
    }

    #[test]
    fn test_load_yaml() {
        let path = write_config("yaml", "server:\n  listen: 127.0.0.1:7000\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:7000");
    }

    #[test]
    fn test_load_jsonc_strips_comments() {
        let path = write_config(
            "jsonc",
            r#"{
  // local dev setup
  "server": {"listen": "127.0.0.1:7001"}
}"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:7001");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let path = write_config("toml", "");
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:8080");
        assert!(config.metrics.listen.is_none());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = write_config("ini", "listen=1");
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::UnsupportedFormat)
        ));
    }
}
