//! Evaluate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::report::{self, render, Metrics};

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// JSON file of labeled fact-check records
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    Text,
    /// Metrics as JSON
    Json,
    /// Raw records as CSV
    Csv,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let records = report::load_records(&self.input)?;
        log::info!("Loaded {} evaluation record(s)", records.len());
        let metrics = Metrics::compute(&records)?;

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        match self.format {
            ReportFormat::Text => render::write_text(&mut writer, &metrics)?,
            ReportFormat::Json => render::write_json(&mut writer, &metrics)?,
            ReportFormat::Csv => render::write_csv(&mut writer, &records)?,
        }
        Ok(())
    }
}
