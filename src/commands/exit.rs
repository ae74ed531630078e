use super::{Command, CommandError, Flow};

/// `exit` — say goodbye and stop the loop.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[&str]) -> Result<Flow, CommandError> {
        println!("Goodbye!");
        Ok(Flow::Stop)
    }
}
