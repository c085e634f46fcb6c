// src/exec/request.rs

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::LaunchSection;
use crate::credential::Credential;

/// Everything needed to start the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Interpreter executable.
    pub program: PathBuf,
    /// `[script, extra args...]`.
    pub args: Vec<OsString>,
    pub working_dir: Option<PathBuf>,
    /// Set in the child's environment only.
    pub credential: Credential,
}

impl LaunchRequest {
    pub fn from_launch(launch: &LaunchSection, credential: Credential) -> Self {
        let mut args = Vec::with_capacity(launch.args.len() + 1);
        args.push(launch.script.clone().into_os_string());
        args.extend(launch.args.iter().map(OsString::from));

        Self {
            program: launch.interpreter.clone(),
            args,
            working_dir: launch.working_dir.clone(),
            credential,
        }
    }

    /// Human-readable command line for logs. Contains no secret.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// How the child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub success: bool,
}

impl LaunchOutcome {
    pub fn from_status(status: std::process::ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
            success: status.success(),
        }
    }

    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            success: code == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch() -> LaunchSection {
        LaunchSection {
            interpreter: "/usr/bin/python3".into(),
            script: "product_automator.py".into(),
            args: vec!["--batch".into()],
            working_dir: None,
            pause: true,
            finished_message: String::new(),
        }
    }

    #[test]
    fn script_is_first_argument() {
        let req = LaunchRequest::from_launch(&launch(), Credential::new("K", "v"));
        assert_eq!(req.program, PathBuf::from("/usr/bin/python3"));
        assert_eq!(
            req.args,
            vec![OsString::from("product_automator.py"), OsString::from("--batch")]
        );
        assert_eq!(
            req.display_command(),
            "/usr/bin/python3 product_automator.py --batch"
        );
    }

    #[test]
    fn outcome_from_exit_code() {
        assert!(LaunchOutcome::exited(0).success);
        let failed = LaunchOutcome::exited(3);
        assert!(!failed.success);
        assert_eq!(failed.exit_code, Some(3));
    }
}
