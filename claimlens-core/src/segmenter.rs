//! Sentence segmentation with Japanese and Latin-script rules
//!
//! Splits a text blob into ordered, non-overlapping claim-sized sentences.
//! Japanese text is cut at the ideographic full stop `。`; Latin-script text
//! is cut at runs of `.!?` followed by whitespace, with honorifics, decimal
//! points, and common abbreviations protected from false splits.
//!
//! Segmentation is a pure function of the input: it never fails, and an
//! empty blob yields an empty sequence.

use crate::sentence::Sentence;
use regex::Regex;

/// Japanese ideographic full stop
const MARU: char = '。';

/// Placeholder for a protected abbreviation period (private-use codepoint,
/// so it cannot collide with input text)
const ABBR_MARK: char = '\u{E000}';

/// Placeholder for a protected decimal point
const DECIMAL_MARK: char = '\u{E001}';

/// Script selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// Detect per blob: the presence of `。` selects the Japanese rules
    #[default]
    Auto,
    /// Always apply the Japanese rules
    Japanese,
    /// Always apply the Latin-script rules
    Latin,
}

/// Segmenter configuration
#[derive(Debug, Clone, Default)]
pub struct SegmenterConfig {
    /// Drop sentences shorter than this many characters after splitting
    ///
    /// Call sites differ on this: interactive checking keeps everything,
    /// batch checking drops fragments under 10 characters. It is a caller
    /// policy, not a segmentation invariant, so the default applies no
    /// minimum.
    pub min_chars: Option<usize>,
    /// Script selection policy
    pub script: Script,
}

impl SegmenterConfig {
    /// Configuration that drops fragments under `min` characters
    pub fn with_min_chars(min: usize) -> Self {
        Self {
            min_chars: Some(min),
            ..Self::default()
        }
    }
}

/// Splits text blobs into claim-sized sentences
///
/// Construction compiles the protection patterns once; [`segment`](Segmenter::segment)
/// is then cheap to call repeatedly.
pub struct Segmenter {
    config: SegmenterConfig,
    honorifics: Regex,
    decimals: Regex,
    abbreviations: Regex,
    terminators: Regex,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmenterConfig::default())
    }
}

impl Segmenter {
    /// Create a segmenter with the given configuration
    pub fn new(config: SegmenterConfig) -> Self {
        // Patterns are fixed at compile time; Regex::new cannot fail on them.
        Self {
            config,
            honorifics: Regex::new(r"\b(Dr|Mr|Mrs|Ms|Prof|Sr|Jr)\.").expect("valid pattern"),
            decimals: Regex::new(r"(\d)\.(\d)").expect("valid pattern"),
            abbreviations: Regex::new(r"\b(vs|etc|Inc|Ltd|Co|Corp|e\.g|i\.e|cf|al)\.")
                .expect("valid pattern"),
            terminators: Regex::new(r"[.!?]+\s+").expect("valid pattern"),
        }
    }

    /// Split `text` into ordered, non-overlapping sentences
    ///
    /// Sentences come back in strictly increasing offset order, each keeping
    /// its terminal punctuation. Unterminated trailing fragments are kept as
    /// sentences of their own.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let japanese = match self.config.script {
            Script::Auto => text.contains(MARU),
            Script::Japanese => true,
            Script::Latin => false,
        };

        let mut sentences = if japanese {
            self.segment_japanese(text)
        } else {
            self.segment_latin(text)
        };

        if let Some(min) = self.config.min_chars {
            sentences.retain(|s| s.char_count() >= min);
        }
        sentences
    }

    /// Japanese path: cut at every `。`, keeping the terminator with the
    /// sentence before it. A trailing fragment without `。` stays as-is.
    fn segment_japanese(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut piece_start = 0;

        for (idx, ch) in text.char_indices() {
            if ch != MARU {
                continue;
            }
            let end = idx + MARU.len_utf8();
            let piece = &text[piece_start..idx];
            if !piece.trim().is_empty() {
                // The sentence text is the exact blob slice from the first
                // non-whitespace byte through the maru, interior whitespace
                // included, so start..end always lands on char boundaries.
                let start = piece_start + (piece.len() - piece.trim_start().len());
                sentences.push(Sentence::new(&text[start..end], start));
            }
            piece_start = end;
        }

        let tail = &text[piece_start..];
        let trimmed = tail.trim();
        if !trimmed.is_empty() {
            let start = piece_start + (tail.len() - tail.trim_start().len());
            sentences.push(Sentence::new(trimmed, start));
        }
        sentences
    }

    /// Latin path: protect non-boundary periods, cut at terminator runs
    /// followed by whitespace, then restore the protected periods.
    fn segment_latin(&self, text: &str) -> Vec<Sentence> {
        let protected = self.honorifics.replace_all(text, format!("${{1}}{ABBR_MARK}").as_str());
        let protected = self
            .decimals
            .replace_all(&protected, format!("${{1}}{DECIMAL_MARK}${{2}}").as_str());
        let protected = self
            .abbreviations
            .replace_all(&protected, format!("${{1}}{ABBR_MARK}").as_str());

        let mut pieces: Vec<String> = Vec::new();
        let mut last = 0;
        for m in self.terminators.find_iter(&protected) {
            // keep the terminator run, not the whitespace that follows it
            let run = m.as_str().trim_end();
            push_piece(&mut pieces, &protected[last..m.start() + run.len()]);
            last = m.end();
        }
        push_piece(&mut pieces, &protected[last..]);

        // Un-punctuated fragments (bullet points, headings) become a single
        // sentence rather than disappearing.
        if pieces.is_empty() && !text.trim().is_empty() {
            pieces.push(text.trim().to_string());
        }

        anchor(text, pieces)
    }
}

/// Restore protected periods, trim, and keep non-empty pieces
fn push_piece(pieces: &mut Vec<String>, raw: &str) {
    let restored = raw.replace(ABBR_MARK, ".").replace(DECIMAL_MARK, ".");
    let trimmed = restored.trim();
    if !trimmed.is_empty() {
        pieces.push(trimmed.to_string());
    }
}

/// Assign offsets by scanning the original blob left to right
///
/// Every piece is a restored substring of the input, in input order, so the
/// forward scan locates each one after the previous sentence's end.
fn anchor(text: &str, pieces: Vec<String>) -> Vec<Sentence> {
    let mut sentences = Vec::with_capacity(pieces.len());
    let mut cursor = 0;
    for piece in pieces {
        let Some(rel) = text[cursor..].find(piece.as_str()) else {
            continue;
        };
        let start = cursor + rel;
        cursor = start + piece.len();
        sentences.push(Sentence::new(piece, start));
    }
    sentences
}
