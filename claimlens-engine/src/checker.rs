//! The abstract checker capability
//!
//! The only interface the reconciler depends on: a claim in, an opaque
//! JSON response out. Concrete HTTP providers live outside this crate;
//! tests use in-memory implementations.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures a checker can report before any payload exists
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Network-level failure before a response arrived
    #[error("transport failure: {0}")]
    Transport(String),

    /// Provider answered with a non-2xx status
    #[error("provider returned status {code}: {message}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Provider-supplied error message, if any
        message: String,
    },
}

/// A capability that fact-checks a single claim
///
/// Implementations are treated as unreliable: they may reject, hang, or
/// return JSON of any shape. The reconciler recovers all of it.
#[async_trait]
pub trait ClaimChecker: Send + Sync {
    /// Check one claim, returning the provider's raw response
    async fn check(&self, claim: &str) -> Result<Value, CheckError>;
}
