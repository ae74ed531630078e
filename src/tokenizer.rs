use std::process;

// Argument separators; runs of these collapse so no empty token is produced.
const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

// Token vector growth step.
const TOKEN_CHUNK: usize = 64;

/// Splits one input line into argument tokens.
///
/// No quoting, escaping, or expansion: a literal `"` or `$` passes through
/// as ordinary text. A line of nothing but delimiters yields an empty list.
pub fn split_line(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = Vec::new();

    for token in line.split(DELIMITERS) {
        if token.is_empty() {
            continue;
        }
        if tokens.len() == tokens.capacity() {
            // Running out of memory while collecting tokens is not recoverable.
            if let Err(err) = tokens.try_reserve(TOKEN_CHUNK) {
                eprintln!("nacre: allocation error: {}", err);
                process::exit(1);
            }
        }
        tokens.push(token);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_delimiter_runs() {
        assert_eq!(
            split_line("echo  hello   world"),
            vec!["echo", "hello", "world"]
        );
    }

    #[test]
    fn test_delimiter_only_input_yields_no_tokens() {
        assert!(split_line("").is_empty());
        assert!(split_line("   \t \r\n").is_empty());
        assert!(split_line("\x07\x07").is_empty());
    }

    #[test]
    fn test_all_delimiters_separate() {
        assert_eq!(
            split_line("ls\t-l\r/tmp\x07a\n"),
            vec!["ls", "-l", "/tmp", "a"]
        );
    }

    #[test]
    fn test_no_quoting_or_expansion() {
        assert_eq!(
            split_line("echo \"a b\" $HOME"),
            vec!["echo", "\"a", "b\"", "$HOME"]
        );
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        assert_eq!(split_line("  pwd  "), vec!["pwd"]);
    }
}
