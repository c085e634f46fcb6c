// src/exec/command.rs

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{LaunchError, Result};
use crate::exec::request::{LaunchOutcome, LaunchRequest};

/// Build the child command for `request`.
///
/// All three standard streams are inherited so the operator sees (and can
/// answer) the child directly. The credential is attached with
/// `Command::env`, which touches the child's environment block only.
pub fn build_command(request: &LaunchRequest) -> Command {
    let mut cmd = Command::new(&request.program);
    cmd.args(&request.args)
        .env(
            request.credential.name(),
            request.credential.expose_value(),
        )
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    if let Some(dir) = &request.working_dir {
        cmd.current_dir(dir);
    }

    cmd
}

/// Spawn the child and wait for it to exit.
///
/// A spawn failure (missing or non-executable interpreter, bad working
/// directory) is returned as [`LaunchError::ExecutionError`]. The child's own
/// exit status is reported, never acted upon.
pub async fn run_child(request: LaunchRequest) -> Result<LaunchOutcome> {
    let program = request.program.display().to_string();

    info!(
        cmd = %request.display_command(),
        credential = %request.credential.name(),
        "starting child process"
    );

    let mut child = build_command(&request)
        .spawn()
        .map_err(|source| LaunchError::ExecutionError {
            program: program.clone(),
            source,
        })?;

    debug!(pid = ?child.id(), "child spawned");

    let status = child
        .wait()
        .await
        .map_err(|source| LaunchError::ExecutionError { program, source })?;

    let outcome = LaunchOutcome::from_status(status);
    info!(
        exit_code = ?outcome.exit_code,
        success = outcome.success,
        "child process exited"
    );

    Ok(outcome)
}
