// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod credential;
pub mod errors;
pub mod exec;
pub mod launcher;
pub mod logging;

use std::io::Write;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, default_config_path, load_and_validate};
use crate::exec::RealProcessBackend;
use crate::launcher::{LaunchPlan, Launcher};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + CLI overrides
/// - credential resolution
/// - the real process backend
/// - stdout / stdin for the completion message and pause
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut cfg = load_and_validate(&config_path)?;
    apply_cli_overrides(&mut cfg, &args);

    info!(config = %config_path.display(), "configuration loaded");

    if args.dry_run {
        let mut stdout = std::io::stdout().lock();
        print_dry_run(&mut stdout, &cfg)?;
        return Ok(());
    }

    let plan = LaunchPlan::from_config(&cfg, |name| std::env::var(name))?;
    let mut launcher = Launcher::new(RealProcessBackend::new(), plan);

    let mut stdout = tokio::io::stdout();
    let mut stdin = BufReader::new(tokio::io::stdin());
    launcher.run(&mut stdout, &mut stdin).await?;

    Ok(())
}

/// Apply `--interpreter`, `--script` and `--no-pause` on top of the file.
pub fn apply_cli_overrides(cfg: &mut ConfigFile, args: &CliArgs) {
    if let Some(interpreter) = &args.interpreter {
        cfg.launch.interpreter = interpreter.clone();
    }
    if let Some(script) = &args.script {
        cfg.launch.script = script.clone();
    }
    if args.no_pause {
        cfg.launch.pause = false;
    }
}

/// Print the launch plan without the secret.
pub fn print_dry_run<W: Write>(out: &mut W, cfg: &ConfigFile) -> std::io::Result<()> {
    writeln!(out, "autolaunch dry-run")?;
    writeln!(out, "  interpreter: {}", cfg.launch.interpreter.display())?;
    writeln!(out, "  script: {}", cfg.launch.script.display())?;
    if !cfg.launch.args.is_empty() {
        writeln!(out, "  args: {:?}", cfg.launch.args)?;
    }
    if let Some(dir) = &cfg.launch.working_dir {
        writeln!(out, "  working_dir: {}", dir.display())?;
    }
    writeln!(
        out,
        "  credential: {} from {}",
        cfg.credential.name,
        cfg.credential.source.describe()
    )?;
    writeln!(out, "  pause: {}", cfg.launch.pause)?;

    debug!("dry-run complete (no execution)");
    Ok(())
}
