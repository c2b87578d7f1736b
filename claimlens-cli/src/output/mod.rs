//! Output formatting for segmented sentences

use anyhow::Result;
use claimlens_core::Sentence;

/// Trait for segment-output formatters
pub trait OutputFormatter: Send + Sync {
    /// Record one segmented sentence from `file`
    fn record(&mut self, file: &str, sentence: &Sentence) -> Result<()>;

    /// Finalize output (e.g., close a JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
