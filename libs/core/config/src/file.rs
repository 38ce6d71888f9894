//! YAML config file loading.

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

use crate::ConfigError;

/// Read and deserialize a YAML config file.
///
/// `path` usually comes from a `--config` flag or the `CONFIG_PATH` variable,
/// so an absent or empty path is an error of its own rather than a silent default.
///
/// # Example
/// ```ignore
/// use core_config::load_yaml;
///
/// let config: AppConfig = load_yaml(Some(Path::new("./config/local.yaml")))?;
/// ```
pub fn load_yaml<T: DeserializeOwned>(path: Option<&Path>) -> Result<T, ConfigError> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(ConfigError::EmptyPath),
    };

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Parsing config file");

    serde_yaml_ng::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
