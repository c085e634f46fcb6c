// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{LaunchError, Result};

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV_VAR: &str = "AUTOLAUNCH_CONFIG";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        LaunchError::ConfigError(format!("cannot read config file {}: {e}", path.display()))
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// The returned config remembers the file's directory so relative
/// `[credential].file` paths resolve next to the config, not the caller's
/// working directory.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config.with_base_dir(config_root_dir(path.as_ref())))
}

/// `$AUTOLAUNCH_CONFIG` if set and non-empty, else `Autolaunch.toml` in the
/// current working directory.
pub fn default_config_path() -> PathBuf {
    resolve_default_path(std::env::var(CONFIG_ENV_VAR).ok())
}

fn resolve_default_path(env_value: Option<String>) -> PathBuf {
    match env_value {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from("Autolaunch.toml"),
    }
}

/// - If the config path has a non-empty parent (e.g. "configs/Autolaunch.toml"),
///   we use that directory.
/// - A bare filename like "Autolaunch.toml" (parent = "") maps to ".".
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
