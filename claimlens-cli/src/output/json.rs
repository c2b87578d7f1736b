//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use claimlens_core::Sentence;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One segmented sentence in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Source file the sentence came from
    pub file: String,
    /// The sentence text
    pub text: String,
    /// Starting byte offset in the source blob
    pub start: usize,
    /// Ending byte offset in the source blob
    pub end: usize,
}

/// JSON formatter - outputs sentences as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<SentenceRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn record(&mut self, file: &str, sentence: &Sentence) -> Result<()> {
        self.records.push(SentenceRecord {
            file: file.to_string(),
            text: sentence.text.clone(),
            start: sentence.start,
            end: sentence.end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
