//! Segment command implementation

use anyhow::{Context, Result};
use clap::Args;
use claimlens_core::{Script, Segmenter, SegmenterConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::input;
use crate::output::{json::JsonFormatter, markdown::MarkdownFormatter, text::TextFormatter};
use crate::output::OutputFormatter;
use crate::progress::ProgressReporter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's default_format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language rules to apply
    #[arg(short, long, value_enum, default_value = "auto")]
    pub language: Language,

    /// Drop sentences shorter than this many characters
    #[arg(short = 'm', long, value_name = "N")]
    pub min_chars: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with offsets
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Supported language rules
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Language {
    /// Detect per file from the text itself
    Auto,
    /// Latin-script rules
    English,
    /// Japanese rules
    Japanese,
}

impl Language {
    fn script(self) -> Script {
        match self {
            Language::Auto => Script::Auto,
            Language::English => Script::Latin,
            Language::Japanese => Script::Japanese,
        }
    }

    fn from_config(name: &str) -> Result<Self> {
        match name {
            "auto" => Ok(Language::Auto),
            "english" => Ok(Language::English),
            "japanese" => Ok(Language::Japanese),
            other => Err(crate::error::CliError::ConfigError(format!(
                "unknown language: {other}"
            ))
            .into()),
        }
    }
}

impl OutputFormat {
    fn from_config(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(crate::error::CliError::ConfigError(format!(
                "unknown output format: {other}"
            ))
            .into()),
        }
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let file_config = self.load_config()?;
        let segmenter = Segmenter::new(self.segmenter_config(&file_config)?);
        let files = input::resolve_patterns(&self.input)?;

        // the bar would interleave with sentences on stdout, so it only
        // draws when writing to a file
        let mut progress =
            ProgressReporter::new(files.len() as u64, self.quiet || self.output.is_none());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.output_format(&file_config)? {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for path in &files {
            let text = input::read_text(path)?;
            let name = path.display().to_string();
            let sentences = segmenter.segment(&text);
            for sentence in &sentences {
                formatter.record(&name, sentence)?;
            }
            progress.file_done(&name, sentences.len());
        }

        formatter.finish()?;
        progress.finish();
        log::info!(
            "Segmented {} file(s) into {} sentence(s)",
            files.len(),
            progress.total_sentences()
        );
        Ok(())
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::load(path),
            None => Ok(CliConfig::default()),
        }
    }

    /// Merge the config file (when given) with command-line flags; flags win.
    fn segmenter_config(&self, file_config: &CliConfig) -> Result<SegmenterConfig> {
        let language = match (self.language, &self.config) {
            (Language::Auto, Some(_)) => Language::from_config(&file_config.segmenter.language)?,
            (flag, _) => flag,
        };

        let min_chars = self
            .min_chars
            .or((file_config.segmenter.min_chars > 0).then_some(file_config.segmenter.min_chars));

        Ok(SegmenterConfig {
            min_chars,
            script: language.script(),
        })
    }

    /// Output format: the `--format` flag, then the config file's
    /// `default_format`, then text.
    fn output_format(&self, file_config: &CliConfig) -> Result<OutputFormat> {
        match (self.format, &self.config) {
            (Some(flag), _) => Ok(flag),
            (None, Some(_)) => OutputFormat::from_config(&file_config.output.default_format),
            (None, None) => Ok(OutputFormat::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> SegmentArgs {
        SegmentArgs {
            input,
            output: None,
            format: None,
            language: Language::Auto,
            min_chars: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn flag_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("claimlens.toml");
        fs::write(
            &config_path,
            "[segmenter]\nlanguage = \"japanese\"\nmin_chars = 5\n",
        )
        .unwrap();

        let mut a = args(vec!["in.txt".to_string()]);
        a.config = Some(config_path);
        a.language = Language::English;
        a.min_chars = Some(20);

        let config = a.segmenter_config(&a.load_config().unwrap()).unwrap();
        assert_eq!(config.script, Script::Latin);
        assert_eq!(config.min_chars, Some(20));
    }

    #[test]
    fn config_file_fills_unset_flags() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("claimlens.toml");
        fs::write(
            &config_path,
            "[segmenter]\nlanguage = \"japanese\"\nmin_chars = 5\n",
        )
        .unwrap();

        let mut a = args(vec!["in.txt".to_string()]);
        a.config = Some(config_path);

        let config = a.segmenter_config(&a.load_config().unwrap()).unwrap();
        assert_eq!(config.script, Script::Japanese);
        assert_eq!(config.min_chars, Some(5));
    }

    #[test]
    fn unknown_config_language_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("claimlens.toml");
        fs::write(&config_path, "[segmenter]\nlanguage = \"klingon\"\n").unwrap();

        let mut a = args(vec!["in.txt".to_string()]);
        a.config = Some(config_path);
        assert!(a.segmenter_config(&a.load_config().unwrap()).is_err());
    }

    #[test]
    fn config_default_format_applies_when_flag_absent() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("claimlens.toml");
        fs::write(&config_path, "[output]\ndefault_format = \"json\"\n").unwrap();

        let mut a = args(vec!["in.txt".to_string()]);
        a.config = Some(config_path);

        let format = a.output_format(&a.load_config().unwrap()).unwrap();
        assert!(matches!(format, OutputFormat::Json));

        a.format = Some(OutputFormat::Markdown);
        let format = a.output_format(&a.load_config().unwrap()).unwrap();
        assert!(matches!(format, OutputFormat::Markdown));
    }

    #[test]
    fn unknown_config_format_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("claimlens.toml");
        fs::write(&config_path, "[output]\ndefault_format = \"yaml\"\n").unwrap();

        let mut a = args(vec!["in.txt".to_string()]);
        a.config = Some(config_path);
        assert!(a.output_format(&a.load_config().unwrap()).is_err());
    }

    #[test]
    fn writes_segmented_output_file() {
        let dir = TempDir::new().unwrap();
        let input_path = dir.path().join("claims.txt");
        fs::write(&input_path, "A is true. B is false.").unwrap();
        let output_path = dir.path().join("out.txt");

        let mut a = args(vec![input_path.display().to_string()]);
        a.output = Some(output_path.clone());
        a.execute().unwrap();

        let out = fs::read_to_string(&output_path).unwrap();
        assert_eq!(out, "A is true.\nB is false.\n");
    }
}
