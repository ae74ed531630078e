use std::env;
use std::path::Path;

use super::{Command, CommandError, Flow};

/// `cd [dir]` — change the working directory, defaulting to `$HOME`.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[&str]) -> Result<Flow, CommandError> {
        let target = match args.get(1) {
            Some(dir) => dir.to_string(),
            // The directory stays unchanged when HOME is missing.
            None => env::var("HOME").map_err(|_| CommandError::HomeNotSet)?,
        };

        env::set_current_dir(Path::new(&target))
            .map_err(|err| CommandError::ChangeDirectory(target.clone(), err))?;

        Ok(Flow::Continue)
    }
}
