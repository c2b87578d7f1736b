//! Metric computation over evaluation records

use super::EvaluationRecord;
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::CliError;

/// Confusion matrix over boolean predictions
///
/// Errored checks (no prediction) appear in none of the four cells; they
/// still drag accuracy down because accuracy is correct-over-total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// ground truth true, predicted true
    pub true_positive: usize,
    /// ground truth false, predicted true
    pub false_positive: usize,
    /// ground truth false, predicted false
    pub true_negative: usize,
    /// ground truth true, predicted false
    pub false_negative: usize,
}

/// Response-time statistics in milliseconds
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimingStats {
    /// Mean response time
    pub mean: f64,
    /// Fastest check
    pub min: u64,
    /// Slowest check
    pub max: u64,
}

/// Factuality score statistics
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreStats {
    /// Mean factuality over records that reported one
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

/// Headline metrics for one evaluation run
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    /// Number of records scored
    pub total: usize,
    /// Number of correct predictions
    pub correct: usize,
    /// Number of errored checks
    pub errors: usize,
    /// correct / total
    pub accuracy: f64,
    /// TP / (TP + FP), 0 when undefined
    pub precision: f64,
    /// TP / (TP + FN), 0 when undefined
    pub recall: f64,
    /// Harmonic mean of precision and recall, 0 when undefined
    pub f1: f64,
    /// Confusion matrix cells
    pub confusion: ConfusionMatrix,
    /// Response time statistics
    pub response_time: TimingStats,
    /// Factuality statistics, when any record reported a score
    pub factuality: Option<ScoreStats>,
    /// Accuracy per category, alphabetical
    pub by_category: BTreeMap<String, f64>,
    /// Accuracy per difficulty, alphabetical
    pub by_difficulty: BTreeMap<String, f64>,
    /// Accuracy per language, alphabetical
    pub by_language: BTreeMap<String, f64>,
}

impl Metrics {
    /// Score a set of evaluation records
    ///
    /// Fails on an empty record set; every ratio with a zero denominator
    /// comes back as 0 rather than NaN.
    pub fn compute(records: &[EvaluationRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(CliError::ReportError("no records to score".into()).into());
        }

        let mut confusion = ConfusionMatrix::default();
        let mut errors = 0;
        for r in records {
            match (r.ground_truth, r.prediction) {
                (true, Some(true)) => confusion.true_positive += 1,
                (false, Some(true)) => confusion.false_positive += 1,
                (false, Some(false)) => confusion.true_negative += 1,
                (true, Some(false)) => confusion.false_negative += 1,
                (_, None) => errors += 1,
            }
        }

        let total = records.len();
        let correct = records.iter().filter(|r| r.correct).count();
        let accuracy = correct as f64 / total as f64;
        let precision = ratio(
            confusion.true_positive,
            confusion.true_positive + confusion.false_positive,
        );
        let recall = ratio(
            confusion.true_positive,
            confusion.true_positive + confusion.false_negative,
        );
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        let times: Vec<u64> = records.iter().map(|r| r.response_time).collect();
        let response_time = TimingStats {
            mean: times.iter().sum::<u64>() as f64 / times.len() as f64,
            min: times.iter().copied().min().unwrap_or(0),
            max: times.iter().copied().max().unwrap_or(0),
        };

        let scores: Vec<f64> = records.iter().filter_map(|r| r.factuality).collect();
        let factuality = if scores.is_empty() {
            None
        } else {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            let variance =
                scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;
            Some(ScoreStats {
                mean,
                std_dev: variance.sqrt(),
            })
        };

        Ok(Self {
            total,
            correct,
            errors,
            accuracy,
            precision,
            recall,
            f1,
            confusion,
            response_time,
            factuality,
            by_category: slice_accuracy(records, |r| &r.category),
            by_difficulty: slice_accuracy(records, |r| &r.difficulty),
            by_language: slice_accuracy(records, |r| &r.language),
        })
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Accuracy grouped by a record attribute, skipping records with an empty
/// attribute value
fn slice_accuracy<'a, F>(records: &'a [EvaluationRecord], key: F) -> BTreeMap<String, f64>
where
    F: Fn(&'a EvaluationRecord) -> &'a str,
{
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for r in records {
        let k = key(r);
        if k.is_empty() {
            continue;
        }
        let entry = counts.entry(k).or_default();
        entry.1 += 1;
        if r.correct {
            entry.0 += 1;
        }
    }
    counts
        .into_iter()
        .map(|(k, (correct, total))| (k.to_string(), correct as f64 / total as f64))
        .collect()
}
