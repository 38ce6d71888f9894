pub mod duration;
pub mod file;
pub mod tracing;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::Display;
use thiserror::Error;

pub use file::load_yaml;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config path is empty")]
    EmptyPath,

    #[error("config file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Invalid value for '{key}': {details}")]
    InvalidValue { key: String, details: String },
}

/// Deployment environment, selected by the `env` key of the config file.
///
/// `local` is a developer machine, `dev` a shared cluster, `prod` production.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[strum(to_string = "local")]
    Local,
    #[serde(alias = "development")]
    #[strum(to_string = "dev")]
    Dev,
    #[serde(alias = "production")]
    #[strum(to_string = "prod")]
    Prod,
}

impl Environment {
    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Local)
    }

    /// Structured JSON logs everywhere except a developer machine
    pub fn use_json_logs(&self) -> bool {
        !self.is_local()
    }
}
