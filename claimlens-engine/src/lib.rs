//! Orchestration layer for claim fact-checking
//!
//! Drives segmented sentences through an external [`ClaimChecker`]
//! capability, recovers every failure mode into an error verdict, and
//! reassembles results in input order. The checker itself is an injected
//! collaborator; this crate never talks to the network.

#![warn(missing_docs)]

pub mod checker;
pub mod reconciler;
pub mod schedule;
pub mod search;

pub use checker::{CheckError, ClaimChecker};
pub use reconciler::{Reconciler, ReconcilerConfig};
pub use schedule::Schedule;
pub use search::{Correction, SearchError, SearchResponse, SourceHit, SourceSearcher, TrustLevel};
