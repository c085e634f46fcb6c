// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`request`] describes what to run (`LaunchRequest`) and how it ended
//!   (`LaunchOutcome`).
//! - [`command`] turns a request into a `tokio::process::Command` and runs it
//!   to completion with inherited stdio.
//! - [`backend`] provides the `ProcessBackend` trait and the
//!   `RealProcessBackend` used in production, which tests can replace with a
//!   fake implementation.

pub mod backend;
pub mod command;
pub mod request;

pub use backend::{ProcessBackend, RealProcessBackend};
pub use command::{build_command, run_child};
pub use request::{LaunchOutcome, LaunchRequest};
