//! Evaluation records and scoring
//!
//! A labeled evaluation run produces one record per claim; this module
//! loads those records and computes the headline metrics (accuracy,
//! precision, recall, F1, timing, factuality spread, and per-slice
//! accuracy breakdowns).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod metrics;
pub mod render;

pub use metrics::Metrics;

/// One labeled fact-check result
///
/// Field names follow the interchange schema used by evaluation tooling
/// (camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    /// Test case identifier
    pub id: String,
    /// The claim that was checked
    pub claim: String,
    /// Labeled truth value of the claim
    pub ground_truth: bool,
    /// Checker's boolean prediction; `None` when the check failed
    pub prediction: Option<bool>,
    /// Whether the prediction matched the ground truth
    pub correct: bool,
    /// Wall-clock time of the check in milliseconds
    pub response_time: u64,
    /// Provider confidence, when reported
    #[serde(default)]
    pub factuality: Option<f64>,
    /// Test case category (science, history, ...)
    #[serde(default)]
    pub category: String,
    /// Test case difficulty (easy, medium, hard)
    #[serde(default)]
    pub difficulty: String,
    /// Test case language (en, ja)
    #[serde(default)]
    pub language: String,
    /// Failure description, when the check errored
    #[serde(default)]
    pub error: Option<String>,
}

/// Load evaluation records from a JSON array file
pub fn load_records(path: &Path) -> Result<Vec<EvaluationRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records: {}", path.display()))?;
    let records: Vec<EvaluationRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid evaluation records in {}", path.display()))?;
    Ok(records)
}
