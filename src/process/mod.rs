use std::fmt;

mod executor;
mod wait;

pub use executor::ProcessExecutor;
pub use wait::Termination;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Spawn(std::io::Error),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::Spawn(err) => write!(f, "failed to start process: {}", err),
            ProcessError::Wait(err) => write!(f, "failed to wait for process: {}", err),
        }
    }
}
