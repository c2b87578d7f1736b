//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
///
/// File and glob failures travel as `anyhow` contexts from the input
/// module; this enum covers the failures with meaning of their own.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file problem
    ConfigError(String),
    /// Evaluation records could not be read or scored
    ReportError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ReportError(msg) => write!(f, "Report error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_covers_all_variants() {
        assert_eq!(
            CliError::ConfigError("missing key".into()).to_string(),
            "Configuration error: missing key"
        );
        assert_eq!(
            CliError::ReportError("empty record set".into()).to_string(),
            "Report error: empty record set"
        );
    }

    #[test]
    fn implements_std_error() {
        let e = CliError::ConfigError("x".into());
        let _: &dyn std::error::Error = &e;
    }
}
