use inksac::prelude::*;

use crate::commands::BUILTIN_NAMES;

// Styles the interactive line and the shell's own messages. Everything
// degrades to plain text when the terminal has no color support.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    #[cfg(test)]
    fn with_support(color_support: ColorSupport) -> Self {
        Self { color_support }
    }

    pub fn highlight_command(&self, input: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return input.to_string();
        }

        let mut parts: Vec<String> = input.split_whitespace().map(String::from).collect();
        if parts.is_empty() {
            return input.to_string();
        }

        // Builtins in green, external commands in cyan
        let command_style = if BUILTIN_NAMES.contains(&parts[0].as_str()) {
            Style::builder().foreground(Color::Green).bold().build()
        } else {
            Style::builder().foreground(Color::Cyan).bold().build()
        };
        parts[0] = parts[0].clone().style(command_style).to_string();

        // Flags in yellow
        for part in parts.iter_mut().skip(1) {
            if part.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                *part = part.clone().style(flag_style).to_string();
            }
        }

        parts.join(" ")
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        error.style(error_style).to_string()
    }

    pub fn highlight_banner(&self, banner: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return banner.to_string();
        }

        let banner_style = Style::builder().foreground(Color::Cyan).build();

        banner.style(banner_style).to_string()
    }
}
