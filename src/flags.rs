use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                set: false,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                set: false,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress the startup banner and warnings".to_string(),
                set: false,
            },
        );

        Flags { flags }
    }

    // Unknown arguments are ignored rather than rejected.
    pub fn parse(&mut self, args: &[String]) {
        for arg in args {
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    flag.set = true;
                }
            }
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|f| f.set)
    }

    pub fn print_help(&self) {
        println!("Usage: nacre [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_forms() {
        let mut flags = Flags::new();
        flags.parse(&["-q".to_string(), "--version".to_string()]);

        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("version"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        let mut flags = Flags::new();
        flags.parse(&["--no-such-flag".to_string(), "extra".to_string()]);

        assert!(!flags.is_set("help"));
        assert!(!flags.is_set("version"));
        assert!(!flags.is_set("quiet"));
    }

    #[test]
    fn test_nothing_set_by_default() {
        let flags = Flags::new();
        for name in ["help", "version", "quiet"] {
            assert!(!flags.is_set(name));
        }
        assert!(!flags.is_set("missing"));
    }
}
