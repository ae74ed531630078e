use std::borrow::Cow;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use crate::commands::Builtins;
use crate::highlight::SyntaxHighlighter;

/// Completes builtin names, and only in command position: candidates are
/// offered when the word under the cursor starts at column 0. Arguments
/// are never completed.
#[derive(Clone)]
pub struct ShellCompleter {
    builtins: Builtins,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCompleter {
    pub fn new() -> Self {
        ShellCompleter {
            builtins: Builtins::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.builtins
            .complete(prefix)
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }

    // The command word is the one starting at column 0. Any whitespace
    // before the cursor means we are past it, so nothing is completed.
    fn completion_target(line_up_to_cursor: &str) -> Option<&str> {
        if line_up_to_cursor.chars().any(char::is_whitespace) {
            return None;
        }
        Some(line_up_to_cursor)
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];

        match Self::completion_target(line_up_to_cursor) {
            Some(prefix) => Ok((0, self.complete_command(prefix))),
            None => Ok((pos, Vec::new())),
        }
    }
}
