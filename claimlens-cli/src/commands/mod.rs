//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod evaluate;
pub mod generate_config;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into claim-sized sentences
    Segment(segment::SegmentArgs),

    /// Score a labeled fact-check run
    Evaluate(evaluate::EvaluateArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Evaluate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_debug_format() {
        let cmd = Commands::Segment(segment::SegmentArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: None,
            language: segment::Language::Auto,
            min_chars: None,
            config: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("Segment"));
        assert!(debug_str.contains("test.txt"));
    }

    #[test]
    fn repeated_logging_init_is_harmless() {
        init_logging(0, false);
        init_logging(2, false);
        init_logging(0, true);
    }
}
