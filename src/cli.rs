use std::path::PathBuf;

use clap::Parser;

use domain_checker::{InputOptions, Validation};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CheckerArgs {
    /// File to read counts and domains from instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Accept any domain text without validation
    #[arg(short, long, default_value_t = false)]
    pub lenient: bool,

    /// Whether to disable logging
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl CheckerArgs {
    pub fn from_env() -> Self {
        Self::parse()
    }

    pub fn input_options(&self) -> InputOptions {
        let validation = if self.lenient {
            Validation::Lenient
        } else {
            Validation::Strict
        };
        InputOptions::new().with_validation(validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CheckerArgs::parse_from(["domain-checker"]);
        assert!(args.input.is_none());
        assert!(!args.quiet);
        assert_eq!(args.input_options().validation, Validation::Strict);
    }

    #[test]
    fn test_flags() {
        let args = CheckerArgs::parse_from(["domain-checker", "-l", "-q", "--input", "list.txt"]);
        assert_eq!(args.input, Some(PathBuf::from("list.txt")));
        assert!(args.quiet);
        assert_eq!(args.input_options().validation, Validation::Lenient);
    }
}
