//! Sentence model shared by the segmenter and the reconciler

use serde::{Deserialize, Serialize};

/// A claim-sized sentence cut from a larger text blob
///
/// Offsets are byte positions into the original blob, so `&blob[start..end]`
/// recovers exactly [`text`](Sentence::text). The segmenter emits sentences
/// in strictly increasing, non-overlapping offset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Byte offset of the first byte in the original blob
    pub start: usize,
    /// Byte offset one past the last byte in the original blob
    pub end: usize,
}

impl Sentence {
    /// Create a sentence anchored at `start`; `end` follows from the text length
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self { text, start, end }
    }

    /// Length of the sentence in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the sentence text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the sentence in characters
    ///
    /// Minimum-length policies count characters, not bytes, so that
    /// Japanese and Latin text are held to the same threshold.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
