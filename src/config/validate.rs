// src/config/validate.rs

use crate::config::model::{
    ConfigFile, CredentialSource, CredentialSpec, LaunchSection, RawConfigFile,
    RawCredentialSection,
};
use crate::errors::{LaunchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::LaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_launch(&raw.launch)?;
        let credential = validate_credential(raw.credential)?;
        Ok(ConfigFile::new_unchecked(raw.launch, credential))
    }
}

fn validate_launch(launch: &LaunchSection) -> Result<()> {
    if launch.interpreter.as_os_str().is_empty() {
        return Err(LaunchError::ConfigError(
            "[launch].interpreter must not be empty".to_string(),
        ));
    }
    if launch.script.as_os_str().is_empty() {
        return Err(LaunchError::ConfigError(
            "[launch].script must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_credential_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LaunchError::ConfigError(
            "[credential].name must not be empty".to_string(),
        ));
    }
    if name.contains('=') || name.contains('\0') {
        return Err(LaunchError::ConfigError(format!(
            "[credential].name '{}' is not a valid environment variable name",
            name.escape_default()
        )));
    }
    Ok(())
}

fn validate_credential(raw: RawCredentialSection) -> Result<CredentialSpec> {
    validate_credential_name(&raw.name)?;

    let mut sources = Vec::new();
    if let Some(value) = raw.value {
        if value.is_empty() {
            return Err(LaunchError::ConfigError(
                "[credential].value must not be empty".to_string(),
            ));
        }
        if value.contains('\0') {
            return Err(LaunchError::ConfigError(
                "[credential].value must not contain a NUL byte".to_string(),
            ));
        }
        sources.push(CredentialSource::Inline(value));
    }
    if let Some(var) = raw.from_env {
        if var.is_empty() {
            return Err(LaunchError::ConfigError(
                "[credential].from_env must name a variable".to_string(),
            ));
        }
        sources.push(CredentialSource::Env(var));
    }
    if let Some(path) = raw.file {
        sources.push(CredentialSource::File(path));
    }

    if sources.len() != 1 {
        return Err(LaunchError::ConfigError(format!(
            "[credential] needs exactly one of `value`, `from_env` or `file` (got {})",
            sources.len()
        )));
    }

    Ok(CredentialSpec {
        name: raw.name,
        source: sources.remove(0),
    })
}
