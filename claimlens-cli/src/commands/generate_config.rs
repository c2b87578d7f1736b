//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to set your segmentation defaults");
        println!(
            "2. Use it for segmentation: claimlens segment -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

const TEMPLATE: &str = r#"# claimlens configuration

[segmenter]
# Language rules applied to input files.
# "auto" picks Japanese rules for text containing the ideographic full stop,
# Latin rules otherwise. Set "english" or "japanese" to force one.
language = "auto"

# Drop sentences shorter than this many characters after splitting.
# 0 keeps everything; batch checking typically uses 10 to skip fragments.
min_chars = 0

[output]
# Default output format: "text", "json", or "markdown".
default_format = "text"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn template_is_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("claimlens.toml");

        let args = GenerateConfigArgs {
            output: path.clone(),
        };
        args.execute().unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.segmenter.language, "auto");
        assert_eq!(config.segmenter.min_chars, 0);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/claimlens.toml"),
        };
        assert!(args.execute().is_err());
    }
}
