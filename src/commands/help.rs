use super::{Command, CommandError, Flow, BUILTIN_NAMES};

/// `help` — print the usage text and the builtin list.
#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

// Also shown once at startup, before the first prompt.
pub(crate) fn print_usage() {
    println!("Type a program name with its arguments and press enter.");
    println!("The tab key completes builtin names at the start of a line.");
    println!("Builtin commands:");
    for name in BUILTIN_NAMES {
        println!("  {}", name);
    }
    println!();
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[&str]) -> Result<Flow, CommandError> {
        print_usage();
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_continues() {
        let cmd = HelpCommand::new();
        assert!(matches!(cmd.execute(&["help"]), Ok(Flow::Continue)));
    }
}
