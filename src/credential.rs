// src/credential.rs

//! Resolving the API credential that gets injected into the child.
//!
//! The value only ever lives in memory and in the child's environment block.
//! `Credential` deliberately has no `Display` impl and a redacted `Debug`.

use std::env::VarError;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{CredentialSource, CredentialSpec};
use crate::errors::{LaunchError, Result};

/// An environment variable name paired with its secret value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    name: String,
    value: String,
}

impl Credential {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The secret. Only the process backend should need this.
    pub fn expose_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Resolve `spec` into a concrete credential.
///
/// `lookup_env` is consulted for [`CredentialSource::Env`]; production passes
/// `|k| std::env::var(k)`. Relative credential files are joined onto
/// `base_dir`.
pub fn resolve<F>(spec: &CredentialSpec, base_dir: &Path, lookup_env: F) -> Result<Credential>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let value = match &spec.source {
        CredentialSource::Inline(value) => {
            warn!(
                credential = %spec.name,
                "credential is stored inline in the config file; prefer `from_env` or `file`"
            );
            value.clone()
        }
        CredentialSource::Env(var) => match lookup_env(var) {
            Ok(value) => value,
            Err(VarError::NotPresent) => {
                return Err(LaunchError::CredentialError(format!(
                    "environment variable {var} (source for {}) is not set",
                    spec.name
                )));
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(LaunchError::CredentialError(format!(
                    "environment variable {var} (source for {}) is set but is not valid UTF-8",
                    spec.name
                )));
            }
        },
        CredentialSource::File(path) => {
            let full = if path.is_absolute() {
                path.clone()
            } else {
                base_dir.join(path)
            };
            let contents = fs::read_to_string(&full).map_err(|e| {
                LaunchError::CredentialError(format!(
                    "cannot read credential file {}: {e}",
                    full.display()
                ))
            })?;
            contents.trim().to_string()
        }
    };

    if value.is_empty() {
        return Err(LaunchError::CredentialError(format!(
            "credential {} resolved to an empty value ({})",
            spec.name,
            spec.source.describe()
        )));
    }

    // The OS rejects NUL in environment values at spawn time.
    if value.contains('\0') {
        return Err(LaunchError::CredentialError(format!(
            "credential {} contains a NUL byte ({})",
            spec.name,
            spec.source.describe()
        )));
    }

    debug!(
        credential = %spec.name,
        source = %spec.source.describe(),
        "credential resolved"
    );

    Ok(Credential::new(spec.name.clone(), value))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn spec(source: CredentialSource) -> CredentialSpec {
        CredentialSpec {
            name: "GEMINI_API_KEY".to_string(),
            source,
        }
    }

    fn no_env(_: &str) -> std::result::Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    #[test]
    fn inline_value_is_used_as_is() {
        let cred = resolve(
            &spec(CredentialSource::Inline("k-123".into())),
            Path::new("."),
            no_env,
        )
        .unwrap();
        assert_eq!(cred.name(), "GEMINI_API_KEY");
        assert_eq!(cred.expose_value(), "k-123");
    }

    #[test]
    fn env_source_reads_through_lookup() {
        let cred = resolve(
            &spec(CredentialSource::Env("AUTOMATOR_KEY".into())),
            Path::new("."),
            |k| {
                if k == "AUTOMATOR_KEY" {
                    Ok("from-env".to_string())
                } else {
                    Err(VarError::NotPresent)
                }
            },
        )
        .unwrap();
        assert_eq!(cred.expose_value(), "from-env");
    }

    #[test]
    fn missing_env_var_is_a_credential_error() {
        let err = resolve(
            &spec(CredentialSource::Env("AUTOMATOR_KEY".into())),
            Path::new("."),
            no_env,
        )
        .unwrap_err();
        assert!(matches!(err, LaunchError::CredentialError(msg) if msg.contains("AUTOMATOR_KEY")));
    }

    #[test]
    fn empty_env_value_is_rejected() {
        let err = resolve(
            &spec(CredentialSource::Env("AUTOMATOR_KEY".into())),
            Path::new("."),
            |_| Ok(String::new()),
        )
        .unwrap_err();
        assert!(matches!(err, LaunchError::CredentialError(msg) if msg.contains("empty")));
    }

    #[test]
    fn relative_file_resolves_against_base_dir_and_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("gemini.key")).unwrap();
        writeln!(f, "  file-secret  ").unwrap();

        let cred = resolve(
            &spec(CredentialSource::File("gemini.key".into())),
            dir.path(),
            no_env,
        )
        .unwrap();
        assert_eq!(cred.expose_value(), "file-secret");
    }

    #[test]
    fn unreadable_file_is_a_credential_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve(
            &spec(CredentialSource::File("absent.key".into())),
            dir.path(),
            no_env,
        )
        .unwrap_err();
        assert!(matches!(err, LaunchError::CredentialError(msg) if msg.contains("absent.key")));
    }

    #[test]
    fn non_utf8_env_var_is_reported_as_such() {
        let err = resolve(
            &spec(CredentialSource::Env("AUTOMATOR_KEY".into())),
            Path::new("."),
            |_| Err(VarError::NotUnicode(std::ffi::OsString::from("\u{fffd}"))),
        )
        .unwrap_err();
        assert!(
            matches!(err, LaunchError::CredentialError(msg) if msg.contains("not valid UTF-8") && !msg.contains("not set"))
        );
    }

    #[test]
    fn nul_byte_in_key_file_is_a_credential_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("gemini.key"), b"ab\0cd").unwrap();

        let err = resolve(
            &spec(CredentialSource::File("gemini.key".into())),
            dir.path(),
            no_env,
        )
        .unwrap_err();
        assert!(matches!(err, LaunchError::CredentialError(msg) if msg.contains("NUL byte")));
    }

    #[test]
    fn nul_byte_in_env_value_is_a_credential_error() {
        let err = resolve(
            &spec(CredentialSource::Env("AUTOMATOR_KEY".into())),
            Path::new("."),
            |_| Ok("ab\0cd".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, LaunchError::CredentialError(msg) if msg.contains("NUL byte")));
    }

    #[test]
    fn debug_output_hides_value() {
        let cred = Credential::new("GEMINI_API_KEY", "do-not-print");
        let rendered = format!("{cred:?}");
        assert!(rendered.contains("GEMINI_API_KEY"));
        assert!(!rendered.contains("do-not-print"));
    }
}
