//! Service configuration
//!
//! The YAML file is located by `--config` or, failing that, `CONFIG_PATH`.
//! Everything else comes from the file and is passed down explicitly.

use clap::Parser;
use core_config::{ConfigError, Environment};
use database::postgres::PostgresCredentials;
use grpc_server::server::ServerConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "item-service", version, about = "gRPC service for item records")]
pub struct Cli {
    /// Path to the YAML config file
    #[arg(long, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,
}

/// Contents of the config file
///
/// ```yaml
/// env: local
/// grpc:
///   port: 44044
///   timeout: 5s
/// storage:
///   host: localhost
///   port: 5432
///   database: items
///   username: postgres
///   password: postgres
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub env: Environment,
    pub grpc: ServerConfig,
    pub storage: PostgresCredentials,
}

impl AppConfig {
    /// Read, parse and validate the config file
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = core_config::load_yaml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grpc.port == 0 {
            return Err(invalid("grpc.port", "must be greater than 0"));
        }
        if self.storage.host.trim().is_empty() {
            return Err(invalid("storage.host", "must not be empty"));
        }
        if self.storage.database.trim().is_empty() {
            return Err(invalid("storage.database", "must not be empty"));
        }
        if self.storage.username.trim().is_empty() {
            return Err(invalid("storage.username", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(key: &str, details: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        details: details.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    const VALID: &str = r#"
env: prod
grpc:
  port: 44044
  timeout: 5s
storage:
  host: localhost
  database: items
  username: postgres
  password: postgres
"#;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(VALID);
        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.env, Environment::Prod);
        assert_eq!(config.grpc.port, 44044);
        assert_eq!(config.grpc.host, "0.0.0.0");
        assert_eq!(config.grpc.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.storage.port, 5432);
        assert_eq!(config.storage.database, "items");
    }

    #[test]
    fn test_env_defaults_to_local() {
        let file = write_config(&VALID.replace("env: prod\n", ""));
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.env, Environment::Local);
    }

    #[test]
    fn test_missing_path() {
        assert!(matches!(AppConfig::load(None), Err(ConfigError::EmptyPath)));
        assert!(matches!(
            AppConfig::load(Some(Path::new("/nonexistent/item-service.yaml"))),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let file = write_config("grpc:\n  port: 44044\n");
        assert!(matches!(
            AppConfig::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_zero_port_rejected() {
        let file = write_config(&VALID.replace("port: 44044", "port: 0"));
        match AppConfig::load(Some(file.path())) {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "grpc.port"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_database_rejected() {
        let file = write_config(&VALID.replace("database: items", "database: \"\""));
        assert!(matches!(
            AppConfig::load(Some(file.path())),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_cli_reads_env_var() {
        let cli = temp_env::with_var("CONFIG_PATH", Some("/etc/items.yaml"), || {
            Cli::try_parse_from(["item-service"]).unwrap()
        });
        assert_eq!(cli.config, Some(PathBuf::from("/etc/items.yaml")));
    }

    #[test]
    fn test_cli_flag_wins_over_env_var() {
        let cli = temp_env::with_var("CONFIG_PATH", Some("/etc/items.yaml"), || {
            Cli::try_parse_from(["item-service", "--config", "./config/local.yaml"]).unwrap()
        });
        assert_eq!(cli.config, Some(PathBuf::from("./config/local.yaml")));
    }

    #[test]
    fn test_cli_without_path() {
        let cli = temp_env::with_var_unset("CONFIG_PATH", || {
            Cli::try_parse_from(["item-service"]).unwrap()
        });
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_repository_config_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/local.yaml");
        let config = AppConfig::load(Some(&path)).unwrap();
        assert!(config.env.is_local());
    }
}
