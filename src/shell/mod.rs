use std::env;
use std::process;

use rustyline::{history::FileHistory, Editor};

use crate::{
    commands::{self, CommandExecutor, Flow},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
    tokenizer,
};

const BANNER: &str = r"
  _ __   __ _  ___ _ __ ___
 | '_ \ / _` |/ __| '__/ _ \
 | | | | (_| | (__| | |  __/
 |_| |_|\__,_|\___|_|  \___|
";

pub struct Shell {
    editor: Editor<ShellCompleter, FileHistory>,
    executor: CommandExecutor,
    highlighter: SyntaxHighlighter,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));

        Ok(Shell {
            editor,
            executor: CommandExecutor::new(),
            highlighter: SyntaxHighlighter::new(),
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.flags.is_set("quiet") {
            self.print_welcome();
        }

        loop {
            let prompt = format!("{} > ", self.current_dir());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Flow::Stop = self.run_line(&line) {
                        break;
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!();
                    process::exit(0);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    continue;
                }
            }
        }
        Ok(())
    }

    fn run_line(&mut self, line: &str) -> Flow {
        if !line.trim().is_empty() {
            if let Err(e) = self.editor.add_history_entry(line) {
                if !self.flags.is_set("quiet") {
                    eprintln!("Warning: Couldn't add to history: {}", e);
                }
            }
        }

        let tokens = tokenizer::split_line(line);
        match self.executor.execute(&tokens) {
            Ok(flow) => flow,
            Err(e) => {
                let message = format!("nacre: {}", e);
                eprintln!("{}", self.highlighter.highlight_error(&message));
                Flow::Continue
            }
        }
    }

    fn current_dir(&self) -> String {
        env::current_dir()
            .map(|dir| dir.to_string_lossy().to_string())
            .unwrap_or_else(|_| String::from("?"))
    }

    fn print_welcome(&self) {
        println!("{}", self.highlighter.highlight_banner(BANNER));
        println!("Welcome to nacre, a minimal interactive shell.");
        println!();
        commands::print_usage();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_line_flow_signals() {
        let mut shell = Shell::new(Flags::new()).expect("failed to build shell");

        assert_eq!(shell.run_line("exit"), Flow::Stop);
        assert_eq!(shell.run_line(""), Flow::Continue);
        assert_eq!(shell.run_line("   \t  "), Flow::Continue);
        assert_eq!(shell.run_line("hello"), Flow::Continue);
    }

    #[test]
    fn test_run_line_survives_command_errors() {
        let mut shell = Shell::new(Flags::new()).expect("failed to build shell");

        assert_eq!(shell.run_line("cd /nonexistent-path-xyz"), Flow::Continue);
        assert_eq!(shell.run_line("no-such-command-xyz"), Flow::Continue);
    }
}
