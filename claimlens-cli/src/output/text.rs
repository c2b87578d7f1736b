//! Plain-text output formatter

use super::OutputFormatter;
use anyhow::Result;
use claimlens_core::Sentence;
use std::io::Write;

/// Text formatter - one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn record(&mut self, _file: &str, sentence: &Sentence) -> Result<()> {
        writeln!(self.writer, "{}", sentence.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
