// src/launcher.rs

//! The launch sequence: run the child, announce completion, pause.

use std::env::VarError;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::console;
use crate::credential;
use crate::errors::Result;
use crate::exec::{LaunchOutcome, LaunchRequest, ProcessBackend};

/// A fully resolved launch: the request plus console behaviour.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub request: LaunchRequest,
    pub finished_message: String,
    pub pause: bool,
}

impl LaunchPlan {
    /// Resolve the credential and build the plan from a validated config.
    pub fn from_config<F>(cfg: &ConfigFile, lookup_env: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let credential = credential::resolve(&cfg.credential, cfg.base_dir(), lookup_env)?;
        Ok(Self {
            request: LaunchRequest::from_launch(&cfg.launch, credential),
            finished_message: cfg.launch.finished_message.clone(),
            pause: cfg.launch.pause,
        })
    }
}

/// Runs a [`LaunchPlan`] on some [`ProcessBackend`].
pub struct Launcher<B> {
    backend: B,
    plan: LaunchPlan,
}

impl<B: ProcessBackend> Launcher<B> {
    pub fn new(backend: B, plan: LaunchPlan) -> Self {
        Self { backend, plan }
    }

    /// Execute the launch sequence.
    ///
    /// 1. run the child to completion (a spawn error returns here, before
    ///    anything is written to `out`)
    /// 2. write the completion message to `out`, whatever the exit status
    /// 3. if pausing, consume one line from `input`
    pub async fn run<W, R>(&mut self, out: &mut W, input: &mut R) -> Result<LaunchOutcome>
    where
        W: AsyncWrite + Unpin,
        R: AsyncBufRead + Unpin,
    {
        let outcome = self
            .backend
            .run_to_completion(self.plan.request.clone())
            .await?;

        info!(
            exit_code = ?outcome.exit_code,
            success = outcome.success,
            "automation finished"
        );

        console::announce_finished(out, &self.plan.finished_message).await?;

        if self.plan.pause {
            let discarded = console::wait_for_enter(input).await?;
            debug!(bytes = discarded, "operator acknowledged");
        }

        Ok(outcome)
    }
}
