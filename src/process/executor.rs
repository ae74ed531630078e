use std::io;
use std::process::{Command, Stdio};

use super::{wait, ProcessError, Termination};

/// Launches external programs and blocks until they terminate.
#[derive(Clone)]
pub struct ProcessExecutor;

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `args` as an external program with inherited stdio; `args` must
    /// be non-empty and `args[0]` is resolved against PATH by the OS.
    /// Blocks until the child exits or is killed by a signal and reports
    /// which of the two ended it.
    pub fn spawn_process(&self, args: &[&str]) -> Result<Termination, ProcessError> {
        let mut command = Command::new(args[0]);
        command
            .args(&args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = match command.spawn() {
            Ok(child) => child,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(args[0].to_string()));
            }
            Err(err) => return Err(ProcessError::Spawn(err)),
        };

        wait::wait_for_termination(child.id() as libc::pid_t)
    }
}
