//! The fact-check reconciler
//!
//! Drives each sentence through the checker capability and yields exactly
//! one verdict per sentence, in input order, no matter how the checker
//! misbehaves. Nothing is retried here; pacing and retry policy belong to
//! the caller via [`Schedule`].

use crate::checker::ClaimChecker;
use crate::schedule::Schedule;
use claimlens_core::{normalize, Segmenter, Sentence, Verdict};
use std::time::{Duration, Instant};

/// Reconciler configuration
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Deadline for a single check; elapsing maps to an error verdict with
    /// reason "timeout" and never cancels sibling checks
    pub timeout: Duration,
    /// Sentences under this many characters get a no-check verdict without
    /// the checker being invoked
    pub min_chars: Option<usize>,
    /// Dispatch pacing
    pub schedule: Schedule,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            min_chars: None,
            schedule: Schedule::default(),
        }
    }
}

/// Reconciles sentences against an external checker
///
/// Holds no shared mutable state; a single instance may serve concurrent
/// calls.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcilerConfig,
}

impl Reconciler {
    /// Create a reconciler with the given configuration
    pub fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Check every sentence, yielding one verdict per sentence in input
    /// order
    ///
    /// This never fails and never panics: transport errors, timeouts, and
    /// unrecognizable payloads all come back as error verdicts.
    pub async fn run<C>(&self, sentences: Vec<Sentence>, checker: &C) -> Vec<Verdict>
    where
        C: ClaimChecker + ?Sized,
    {
        let batch_size = self.config.schedule.batch_size();
        let delay = self.config.schedule.delay();

        let mut verdicts = Vec::with_capacity(sentences.len());
        let mut remaining = sentences.into_iter();
        let mut first = true;
        loop {
            let batch: Vec<Sentence> = remaining.by_ref().take(batch_size).collect();
            if batch.is_empty() {
                break;
            }
            if !first && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            first = false;

            // join_all yields results in request order, so batches never
            // reorder verdicts regardless of completion order.
            let checks = batch.into_iter().map(|s| self.check_sentence(s, checker));
            verdicts.extend(futures::future::join_all(checks).await);
        }
        verdicts
    }

    /// Segment a blob and check the result in one call
    ///
    /// A blob that leaves nothing checkable after segmentation and
    /// filtering yields a single error verdict covering the trimmed blob,
    /// so the failure stays visible instead of silently producing nothing.
    /// An empty blob yields an empty sequence.
    pub async fn check_text<C>(
        &self,
        text: &str,
        segmenter: &Segmenter,
        checker: &C,
    ) -> Vec<Verdict>
    where
        C: ClaimChecker + ?Sized,
    {
        let sentences = segmenter.segment(text);
        let trimmed = text.trim();
        if sentences.is_empty() {
            if trimmed.is_empty() {
                return Vec::new();
            }
            let start = text.len() - text.trim_start().len();
            return vec![Verdict::error(
                Sentence::new(trimmed, start),
                claimlens_core::CoreError::EmptyInput.to_string(),
            )];
        }
        self.run(sentences, checker).await
    }

    /// Check a single sentence, folding every failure into a verdict
    async fn check_sentence<C>(&self, sentence: Sentence, checker: &C) -> Verdict
    where
        C: ClaimChecker + ?Sized,
    {
        if let Some(min) = self.config.min_chars {
            if sentence.char_count() < min {
                tracing::debug!(claim = %preview(&sentence.text), "below minimum length, skipping");
                return Verdict::no_check(sentence);
            }
        }

        tracing::debug!(claim = %preview(&sentence.text), "checking claim");
        let started = Instant::now();

        let verdict = match tokio::time::timeout(self.config.timeout, checker.check(&sentence.text))
            .await
        {
            Err(_) => Verdict::error(sentence, "timeout"),
            Ok(Err(e)) => Verdict::error(sentence, e.to_string()),
            Ok(Ok(raw)) => match normalize(&raw) {
                Ok(payload) => Verdict::from_payload(sentence, payload),
                Err(e) => Verdict::error(sentence, e.to_string()),
            },
        };

        tracing::info!(
            claim = %preview(&verdict.sentence.text),
            outcome = %verdict.outcome,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "claim checked"
        );
        verdict
    }
}

/// First 30 characters of a claim, for log lines
fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(30).collect();
    if out.len() < text.len() {
        out.push('…');
    }
    out
}
