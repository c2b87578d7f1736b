//! claimlens CLI library
//!
//! Command-line front end for the claimlens segmentation core: splits text
//! files into claim-sized sentences and scores labeled fact-check runs.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod report;

pub use error::{CliError, CliResult};
