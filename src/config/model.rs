// src/config/model.rs

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the variable the automator reads its API key from.
pub const DEFAULT_CREDENTIAL_NAME: &str = "GEMINI_API_KEY";

/// Line printed once the child has exited.
pub const DEFAULT_FINISHED_MESSAGE: &str = "Automation script finished. Press Enter to close.";

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [launch]
/// interpreter = "/usr/bin/python3"
/// script = "product_automator.py"
///
/// [credential]
/// name = "GEMINI_API_KEY"
/// from_env = "AUTOMATOR_GEMINI_KEY"
/// ```
///
/// Use [`ConfigFile::try_from`] (or `config::load_and_validate`) to get a
/// checked [`ConfigFile`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// What to run, from `[launch]`.
    pub launch: LaunchSection,

    /// Where the API key comes from, from `[credential]`.
    #[serde(default)]
    pub credential: RawCredentialSection,
}

/// `[launch]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LaunchSection {
    /// Interpreter executable, e.g. `/usr/bin/python3`.
    pub interpreter: PathBuf,

    /// Script handed to the interpreter as its first argument.
    pub script: PathBuf,

    /// Extra arguments after the script. Empty by default.
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory for the child. `None` inherits the launcher's.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Wait for one line on stdin before exiting.
    #[serde(default = "default_pause")]
    pub pause: bool,

    #[serde(default = "default_finished_message")]
    pub finished_message: String,
}

fn default_pause() -> bool {
    true
}

fn default_finished_message() -> String {
    DEFAULT_FINISHED_MESSAGE.to_string()
}

fn default_credential_name() -> String {
    DEFAULT_CREDENTIAL_NAME.to_string()
}

/// `[credential]` section as written. Exactly one of `value`, `from_env`
/// and `file` must be set; validation enforces that.
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCredentialSection {
    #[serde(default = "default_credential_name")]
    pub name: String,

    /// Secret written inline in the config file.
    #[serde(default)]
    pub value: Option<String>,

    /// Name of a launcher environment variable holding the secret.
    #[serde(default)]
    pub from_env: Option<String>,

    /// File holding the secret. Relative paths resolve against the config
    /// file's directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for RawCredentialSection {
    fn default() -> Self {
        Self {
            name: default_credential_name(),
            value: None,
            from_env: None,
            file: None,
        }
    }
}

impl fmt::Debug for RawCredentialSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawCredentialSection")
            .field("name", &self.name)
            .field("value", &self.value.as_ref().map(|_| "<redacted>"))
            .field("from_env", &self.from_env)
            .field("file", &self.file)
            .finish()
    }
}

/// Where the credential value is read from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Inline(String),
    Env(String),
    File(PathBuf),
}

impl CredentialSource {
    /// Short label for logs and dry-run output. Never includes a secret.
    pub fn describe(&self) -> String {
        match self {
            CredentialSource::Inline(_) => "inline value in config".to_string(),
            CredentialSource::Env(var) => format!("environment variable {var}"),
            CredentialSource::File(path) => format!("file {}", path.display()),
        }
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Inline(_) => f.write_str("Inline(<redacted>)"),
            CredentialSource::Env(var) => f.debug_tuple("Env").field(var).finish(),
            CredentialSource::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}

/// Validated `[credential]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSpec {
    pub name: String,
    pub source: CredentialSource,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub launch: LaunchSection,
    pub credential: CredentialSpec,
    base_dir: PathBuf,
}

impl ConfigFile {
    /// Build a config without validation. Callers outside `validate` should
    /// go through `TryFrom<RawConfigFile>`.
    pub(crate) fn new_unchecked(launch: LaunchSection, credential: CredentialSpec) -> Self {
        Self {
            launch,
            credential,
            base_dir: PathBuf::from("."),
        }
    }

    /// Directory relative credential files are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }
}
