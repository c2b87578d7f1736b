//! Core error types

use thiserror::Error;

/// Errors raised by the core layer
///
/// The segmenter never fails; these cover response normalization and the
/// "nothing left to check" condition callers hit after filtering.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The raw checker response matched none of the known shapes
    #[error("no valid response data")]
    MalformedResponse,

    /// Segmentation and filtering left no checkable sentences
    #[error("no checkable sentences in input")]
    EmptyInput,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
