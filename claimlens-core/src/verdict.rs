//! Verdict data model and per-container aggregation

use crate::response::CheckPayload;
use crate::sentence::Sentence;
use serde::{Deserialize, Serialize};

/// Categorical result of checking one claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The provider judged the claim accurate
    True,
    /// The provider judged the claim inaccurate
    False,
    /// The provider answered but gave no usable boolean
    Unknown,
    /// The sentence was skipped before any check ran
    NoCheck,
    /// The check failed (transport, timeout, or malformed response)
    Error,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Outcome::True => "true",
            Outcome::False => "false",
            Outcome::Unknown => "unknown",
            Outcome::NoCheck => "no_check",
            Outcome::Error => "error",
        };
        write!(f, "{label}")
    }
}

/// A supporting or refuting source returned by the checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Source URL
    pub url: String,
    /// Quote from the source bearing on the claim
    #[serde(rename = "keyQuote", default)]
    pub key_quote: String,
    /// Whether the source supports the claim
    #[serde(rename = "isSupportive", default)]
    pub is_supportive: bool,
}

/// The checked result for a single sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The sentence that was checked
    pub sentence: Sentence,
    /// Categorical outcome
    pub outcome: Outcome,
    /// Provider explanation, or the failure description for errors
    pub reason: Option<String>,
    /// Provider confidence in [0, 1] that the claim is accurate
    pub factuality: Option<f64>,
    /// Sources cited by the provider, in provider order
    pub references: Vec<Reference>,
}

impl Verdict {
    /// Build a verdict from a normalized checker payload
    ///
    /// A boolean `result` maps to [`Outcome::True`]/[`Outcome::False`]; a
    /// payload without a usable boolean maps to [`Outcome::Unknown`].
    pub fn from_payload(sentence: Sentence, payload: CheckPayload) -> Self {
        let outcome = match payload.result {
            Some(true) => Outcome::True,
            Some(false) => Outcome::False,
            None => Outcome::Unknown,
        };
        Self {
            sentence,
            outcome,
            reason: payload.reason,
            factuality: payload.factuality,
            references: payload.references,
        }
    }

    /// Build an error verdict with a human-readable reason
    pub fn error(sentence: Sentence, reason: impl Into<String>) -> Self {
        Self {
            sentence,
            outcome: Outcome::Error,
            reason: Some(reason.into()),
            factuality: None,
            references: Vec::new(),
        }
    }

    /// Build a verdict for a sentence that was skipped before checking
    pub fn no_check(sentence: Sentence) -> Self {
        Self {
            sentence,
            outcome: Outcome::NoCheck,
            reason: None,
            factuality: None,
            references: Vec::new(),
        }
    }

    /// P(claim is accurate) for display
    ///
    /// Providers report `factuality` as confidence in their own verdict, so
    /// for a False outcome the probability the claim is accurate is the
    /// complement.
    pub fn adjusted_factuality(&self) -> Option<f64> {
        self.factuality.map(|f| match self.outcome {
            Outcome::False => 1.0 - f,
            _ => f,
        })
    }
}

/// Aggregate classification of a verdict set
///
/// Derived by folding, never stored; used to pick one representative label
/// for a container holding several sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// At least one sentence was judged false
    pub has_false: bool,
    /// At least one sentence was judged true
    pub has_true: bool,
    /// At least one check failed
    pub has_error: bool,
}

impl Summary {
    /// Single representative label for the whole container
    ///
    /// Precedence: False > True > Error > Unknown.
    pub fn representative(&self) -> Outcome {
        if self.has_false {
            Outcome::False
        } else if self.has_true {
            Outcome::True
        } else if self.has_error {
            Outcome::Error
        } else {
            Outcome::Unknown
        }
    }
}

/// Fold a verdict sequence into its aggregate classification
pub fn aggregate(verdicts: &[Verdict]) -> Summary {
    verdicts.iter().fold(Summary::default(), |mut acc, v| {
        match v.outcome {
            Outcome::False => acc.has_false = true,
            Outcome::True => acc.has_true = true,
            Outcome::Error => acc.has_error = true,
            Outcome::Unknown | Outcome::NoCheck => {}
        }
        acc
    })
}

/// How a container of checked sentences is labeled
///
/// Both policies exist in the wild: one overlay marks every sentence with
/// its own outcome, the other paints the whole block with one
/// representative label. Neither is the "correct" one; callers choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightPolicy {
    /// One label per sentence
    #[default]
    PerSentence,
    /// One representative label for the whole block
    WholeBlock,
}

impl HighlightPolicy {
    /// Labels for each verdict under this policy, in verdict order
    pub fn labels(&self, verdicts: &[Verdict]) -> Vec<Outcome> {
        match self {
            HighlightPolicy::PerSentence => verdicts.iter().map(|v| v.outcome).collect(),
            HighlightPolicy::WholeBlock => {
                let rep = aggregate(verdicts).representative();
                verdicts.iter().map(|_| rep).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(outcome: Outcome) -> Verdict {
        Verdict {
            sentence: Sentence::new("x", 0),
            outcome,
            reason: None,
            factuality: None,
            references: Vec::new(),
        }
    }

    #[test]
    fn aggregate_of_empty_is_all_false() {
        let summary = aggregate(&[]);
        assert_eq!(summary, Summary::default());
        assert!(!summary.has_false && !summary.has_true && !summary.has_error);
    }

    #[test]
    fn aggregate_records_false_and_true_simultaneously() {
        let summary = aggregate(&[verdict(Outcome::False), verdict(Outcome::True)]);
        assert!(summary.has_false);
        assert!(summary.has_true);
        assert!(!summary.has_error);
    }

    #[test]
    fn representative_precedence() {
        let mut s = Summary {
            has_false: true,
            has_true: true,
            has_error: true,
        };
        assert_eq!(s.representative(), Outcome::False);
        s.has_false = false;
        assert_eq!(s.representative(), Outcome::True);
        s.has_true = false;
        assert_eq!(s.representative(), Outcome::Error);
        s.has_error = false;
        assert_eq!(s.representative(), Outcome::Unknown);
    }

    #[test]
    fn no_check_does_not_count_as_error() {
        let summary = aggregate(&[verdict(Outcome::NoCheck), verdict(Outcome::Unknown)]);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn adjusted_factuality_inverts_for_false() {
        let mut v = verdict(Outcome::False);
        v.factuality = Some(0.9);
        assert_eq!(v.adjusted_factuality(), Some(1.0 - 0.9));

        let mut v = verdict(Outcome::True);
        v.factuality = Some(0.9);
        assert_eq!(v.adjusted_factuality(), Some(0.9));
    }

    #[test]
    fn whole_block_policy_paints_every_sentence_the_same() {
        let verdicts = vec![verdict(Outcome::True), verdict(Outcome::False)];
        assert_eq!(
            HighlightPolicy::WholeBlock.labels(&verdicts),
            vec![Outcome::False, Outcome::False]
        );
        assert_eq!(
            HighlightPolicy::PerSentence.labels(&verdicts),
            vec![Outcome::True, Outcome::False]
        );
    }

    #[test]
    fn reference_serde_uses_wire_names() {
        let json = r#"{"url":"https://example.com","keyQuote":"quote","isSupportive":true}"#;
        let r: Reference = serde_json::from_str(json).unwrap();
        assert!(r.is_supportive);
        assert_eq!(r.key_quote, "quote");
        let back = serde_json::to_string(&r).unwrap();
        assert!(back.contains("keyQuote"));
    }
}
