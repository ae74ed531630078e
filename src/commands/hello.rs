use super::{Command, CommandError, Flow};

/// `hello` — print a greeting.
#[derive(Clone)]
pub struct HelloCommand;

impl Default for HelloCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelloCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelloCommand {
    fn execute(&self, _args: &[&str]) -> Result<Flow, CommandError> {
        println!("Hello from nacre! Have a good session.");
        Ok(Flow::Continue)
    }
}
