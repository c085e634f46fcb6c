// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The launcher talks to a `ProcessBackend` instead of spawning directly.
//! Production uses `RealProcessBackend`; tests can provide a backend that
//! records the request and returns a canned outcome or spawn error.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::request::{LaunchOutcome, LaunchRequest};

use super::command::run_child;

/// Trait abstracting how the child process is run.
pub trait ProcessBackend: Send {
    /// Start the child described by `request` and wait until it exits.
    ///
    /// Failing to start must surface as an error; a child that starts and
    /// exits non-zero is an `Ok` outcome.
    fn run_to_completion(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome>> + Send + '_>>;
}

/// Backend that spawns a real OS process via `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealProcessBackend;

impl RealProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessBackend for RealProcessBackend {
    fn run_to_completion(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome>> + Send + '_>> {
        Box::pin(run_child(request))
    }
}
