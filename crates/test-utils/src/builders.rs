#![allow(dead_code)]

use std::env::VarError;
use std::ffi::OsString;
use std::path::PathBuf;

use autolaunch::config::{ConfigFile, LaunchSection, RawConfigFile, RawCredentialSection};
use autolaunch::credential::Credential;
use autolaunch::exec::LaunchRequest;
use autolaunch::launcher::LaunchPlan;

/// Builder for `ConfigFile` to simplify test setup.
///
/// Starts from `python3 product_automator.py` with an inline credential.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                launch: LaunchSection {
                    interpreter: PathBuf::from("python3"),
                    script: PathBuf::from("product_automator.py"),
                    args: Vec::new(),
                    working_dir: None,
                    pause: true,
                    finished_message: autolaunch::config::DEFAULT_FINISHED_MESSAGE.to_string(),
                },
                credential: RawCredentialSection {
                    value: Some("test-key".to_string()),
                    ..RawCredentialSection::default()
                },
            },
        }
    }

    pub fn interpreter(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.launch.interpreter = path.into();
        self
    }

    pub fn script(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.launch.script = path.into();
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.config.launch.args.push(arg.to_string());
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.launch.working_dir = Some(dir.into());
        self
    }

    pub fn pause(mut self, pause: bool) -> Self {
        self.config.launch.pause = pause;
        self
    }

    pub fn finished_message(mut self, msg: &str) -> Self {
        self.config.launch.finished_message = msg.to_string();
        self
    }

    pub fn credential_name(mut self, name: &str) -> Self {
        self.config.credential.name = name.to_string();
        self
    }

    /// Replace the credential source with an inline value.
    pub fn inline_credential(mut self, value: &str) -> Self {
        self.config.credential = RawCredentialSection {
            name: self.config.credential.name,
            value: Some(value.to_string()),
            ..RawCredentialSection::default()
        };
        self
    }

    /// Replace the credential source with a launcher environment variable.
    pub fn credential_from_env(mut self, var: &str) -> Self {
        self.config.credential = RawCredentialSection {
            name: self.config.credential.name,
            from_env: Some(var.to_string()),
            ..RawCredentialSection::default()
        };
        self
    }

    /// Replace the credential source with a file.
    pub fn credential_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.credential = RawCredentialSection {
            name: self.config.credential.name,
            file: Some(path.into()),
            ..RawCredentialSection::default()
        };
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }

    /// Build a plan straight away, resolving env sources against nothing.
    pub fn build_plan(self) -> LaunchPlan {
        LaunchPlan::from_config(&self.build(), |_| Err(VarError::NotPresent))
            .expect("Failed to resolve credential for builder plan")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for a request that runs `program` with `args` and credential
/// `name=value`.
pub fn request(program: &str, args: &[&str], name: &str, value: &str) -> LaunchRequest {
    LaunchRequest {
        program: PathBuf::from(program),
        args: args.iter().map(|a| OsString::from(*a)).collect(),
        working_dir: None,
        credential: Credential::new(name, value),
    }
}
