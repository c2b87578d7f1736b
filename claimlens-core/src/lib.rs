//! Core primitives for claim extraction and fact-check reconciliation
//!
//! This crate is host-independent: it knows nothing about where text comes
//! from (slides, files, stdin) or which provider checks a claim. It covers
//! the two pure pieces of the pipeline:
//!
//! - [`Segmenter`]: splits a text blob into ordered, non-overlapping
//!   claim-sized sentences, with Japanese and Latin-script rules.
//! - the verdict model ([`Verdict`], [`Outcome`], [`Summary`]) plus the
//!   normalization of heterogeneous checker responses ([`normalize`]).

#![warn(missing_docs)]

pub mod error;
pub mod response;
pub mod segmenter;
pub mod sentence;
pub mod verdict;

pub use error::{CoreError, Result};
pub use response::{normalize, CheckPayload, RawShape};
pub use segmenter::{Script, Segmenter, SegmenterConfig};
pub use sentence::Sentence;
pub use verdict::{aggregate, HighlightPolicy, Outcome, Reference, Summary, Verdict};
