//! Alternative-source search and claim correction
//!
//! When a claim comes back false, the user can consult a second search
//! capability for trustworthy sources and apply a corrected wording to the
//! original text. Like the checker, the concrete search provider is an
//! injected collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures a search capability can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Network-level failure
    #[error("transport failure: {0}")]
    Transport(String),

    /// Provider answered with a non-2xx status
    #[error("search provider returned status {0}")]
    Status(u16),

    /// The request exceeded its deadline
    #[error("search timed out")]
    Timeout,
}

/// Editorial trust classification of a source domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    /// Government agencies (.gov, go.jp)
    Government,
    /// International organizations (WHO, UN, OECD, World Bank)
    International,
    /// Universities and educational institutions (.edu, ac.jp)
    Academic,
    /// Peer-reviewed journals and indexes
    Scientific,
    /// Reference encyclopedias
    Encyclopedia,
    /// Established news agencies
    News,
    /// Everything else
    #[default]
    General,
}

impl TrustLevel {
    /// Classify a URL by its host suffix
    pub fn classify(url: &str) -> Self {
        let host = host_of(url);
        let matches_any = |domains: &[&str]| {
            domains
                .iter()
                .any(|d| host == *d || host.ends_with(&format!(".{d}")))
        };

        if matches_any(&["go.jp", "gov"]) {
            TrustLevel::Government
        } else if matches_any(&["who.int", "un.org", "oecd.org", "worldbank.org"]) {
            TrustLevel::International
        } else if matches_any(&["edu", "ac.jp"]) {
            TrustLevel::Academic
        } else if matches_any(&[
            "nature.com",
            "science.org",
            "sciencedirect.com",
            "pubmed.ncbi.nlm.nih.gov",
            "scholar.google.com",
        ]) {
            TrustLevel::Scientific
        } else if matches_any(&["wikipedia.org", "britannica.com"]) {
            TrustLevel::Encyclopedia
        } else if matches_any(&["reuters.com", "apnews.com", "bbc.com", "nhk.or.jp"]) {
            TrustLevel::News
        } else {
            TrustLevel::General
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TrustLevel::Government => "government agency",
            TrustLevel::International => "international organization",
            TrustLevel::Academic => "academic institution",
            TrustLevel::Scientific => "scientific publication",
            TrustLevel::Encyclopedia => "encyclopedia",
            TrustLevel::News => "news agency",
            TrustLevel::General => "general source",
        }
    }

    /// Sort key; lower is more trusted
    fn rank(&self) -> u8 {
        match self {
            TrustLevel::Government => 0,
            TrustLevel::International => 1,
            TrustLevel::Academic => 2,
            TrustLevel::Scientific => 3,
            TrustLevel::Encyclopedia => 4,
            TrustLevel::News => 5,
            TrustLevel::General => 6,
        }
    }
}

/// Host portion of a URL, without scheme, port, or path
fn host_of(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = host.split('@').next_back().unwrap_or(host);
    let host = host.split(':').next().unwrap_or(host);
    host.to_ascii_lowercase()
}

/// One ranked search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceHit {
    /// Result title
    pub title: String,
    /// Result URL
    pub url: String,
    /// Extracted page content
    pub content: String,
    /// Trust classification of the source
    #[serde(default)]
    pub trust: TrustLevel,
}

impl SourceHit {
    /// Build a hit, classifying the trust level from the URL
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let url = url.into();
        let trust = TrustLevel::classify(&url);
        Self {
            title: title.into(),
            url,
            content: content.into(),
            trust,
        }
    }
}

/// Search results plus the provider's direct answer, if any
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Results in provider order
    pub results: Vec<SourceHit>,
    /// Provider-synthesized answer to the query
    pub answer: Option<String>,
}

impl SearchResponse {
    /// Results sorted most-trusted first, stable within equal trust
    pub fn ranked(&self) -> Vec<&SourceHit> {
        let mut hits: Vec<&SourceHit> = self.results.iter().collect();
        hits.sort_by_key(|h| h.trust.rank());
        hits
    }
}

/// A capability that finds trustworthy sources for a claim
#[async_trait]
pub trait SourceSearcher: Send + Sync {
    /// Search for sources bearing on `claim`
    async fn search(&self, claim: &str) -> Result<SearchResponse, SearchError>;
}

/// A user-selected correction for a claim judged false
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// The claim text as it appears in the container
    pub original: String,
    /// The corrected wording
    pub replacement: String,
    /// Where the correction came from
    pub source_url: Option<String>,
}

impl Correction {
    /// Apply the correction to the first occurrence of the original claim
    ///
    /// Returns `None` when the claim no longer occurs (the container was
    /// edited since the check ran), leaving the text untouched.
    pub fn apply(&self, text: &str) -> Option<String> {
        if text.contains(&self.original) {
            Some(text.replacen(&self.original, &self.replacement, 1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_domain_suffix() {
        assert_eq!(
            TrustLevel::classify("https://www.mhlw.go.jp/stf/page.html"),
            TrustLevel::Government
        );
        assert_eq!(
            TrustLevel::classify("https://www.cdc.gov/flu"),
            TrustLevel::Government
        );
        assert_eq!(
            TrustLevel::classify("https://www.who.int/news"),
            TrustLevel::International
        );
        assert_eq!(
            TrustLevel::classify("https://www.u-tokyo.ac.jp/"),
            TrustLevel::Academic
        );
        assert_eq!(
            TrustLevel::classify("https://pubmed.ncbi.nlm.nih.gov/12345/"),
            TrustLevel::Scientific
        );
        assert_eq!(
            TrustLevel::classify("https://en.wikipedia.org/wiki/Japan"),
            TrustLevel::Encyclopedia
        );
        assert_eq!(
            TrustLevel::classify("https://www.bbc.com/news"),
            TrustLevel::News
        );
        assert_eq!(
            TrustLevel::classify("https://example.com/blog"),
            TrustLevel::General
        );
    }

    #[test]
    fn classification_ignores_lookalike_domains() {
        // "gov" must be a label boundary, not a substring
        assert_eq!(
            TrustLevel::classify("https://notagov.com/"),
            TrustLevel::General
        );
        assert_eq!(
            TrustLevel::classify("https://fakewikipedia.org.example.com/"),
            TrustLevel::General
        );
    }

    #[test]
    fn ranked_puts_trusted_sources_first() {
        let response = SearchResponse {
            results: vec![
                SourceHit::new("blog", "https://example.com/a", ""),
                SourceHit::new("who", "https://www.who.int/a", ""),
                SourceHit::new("bbc", "https://www.bbc.com/a", ""),
            ],
            answer: None,
        };
        let ranked = response.ranked();
        assert_eq!(ranked[0].url, "https://www.who.int/a");
        assert_eq!(ranked[1].url, "https://www.bbc.com/a");
        assert_eq!(ranked[2].url, "https://example.com/a");
    }

    #[test]
    fn correction_replaces_first_occurrence_only() {
        let c = Correction {
            original: "Mt. Fuji is 3000m tall.".to_string(),
            replacement: "Mt. Fuji is 3776m tall.".to_string(),
            source_url: None,
        };
        let text = "Mt. Fuji is 3000m tall. Mt. Fuji is 3000m tall.";
        let fixed = c.apply(text).unwrap();
        assert_eq!(
            fixed,
            "Mt. Fuji is 3776m tall. Mt. Fuji is 3000m tall."
        );
    }

    #[test]
    fn correction_misses_when_text_changed() {
        let c = Correction {
            original: "old claim".to_string(),
            replacement: "new claim".to_string(),
            source_url: Some("https://example.com".to_string()),
        };
        assert_eq!(c.apply("something else entirely"), None);
    }

    #[test]
    fn host_extraction_handles_ports_and_paths() {
        assert_eq!(host_of("https://example.com:8080/path?q=1"), "example.com");
        assert_eq!(host_of("http://EXAMPLE.com/"), "example.com");
        assert_eq!(host_of("example.com"), "example.com");
    }
}
