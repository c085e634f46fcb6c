use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use autolaunch::errors::{LaunchError, Result};
use autolaunch::exec::{LaunchOutcome, LaunchRequest, ProcessBackend};

/// What the fake does when asked to run a child.
#[derive(Debug, Clone, Copy)]
pub enum FakeBehaviour {
    /// Pretend the child ran and exited with this code.
    Exit(i32),
    /// Pretend the interpreter could not be found.
    SpawnFails,
}

/// A fake backend that:
/// - records every request it was given
/// - returns the configured outcome without spawning anything.
#[derive(Clone)]
pub struct FakeBackend {
    behaviour: FakeBehaviour,
    requests: Arc<Mutex<Vec<LaunchRequest>>>,
}

impl FakeBackend {
    pub fn new(behaviour: FakeBehaviour) -> Self {
        Self {
            behaviour,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded requests.
    pub fn requests(&self) -> Arc<Mutex<Vec<LaunchRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl ProcessBackend for FakeBackend {
    fn run_to_completion(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome>> + Send + '_>> {
        let behaviour = self.behaviour;
        let requests = Arc::clone(&self.requests);

        Box::pin(async move {
            let program = request.program.display().to_string();
            requests.lock().unwrap().push(request);

            match behaviour {
                FakeBehaviour::Exit(code) => Ok(LaunchOutcome::exited(code)),
                FakeBehaviour::SpawnFails => Err(LaunchError::ExecutionError {
                    program,
                    source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
                }),
            }
        })
    }
}
