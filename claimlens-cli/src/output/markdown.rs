//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use claimlens_core::Sentence;
use std::io::Write;

/// Markdown formatter - outputs sentences as a numbered list per file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    current_file: Option<String>,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_file: None,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn record(&mut self, file: &str, sentence: &Sentence) -> Result<()> {
        if self.current_file.as_deref() != Some(file) {
            if self.current_file.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {file}")?;
            writeln!(self.writer)?;
            self.current_file = Some(file.to_string());
        }
        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, sentence.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
