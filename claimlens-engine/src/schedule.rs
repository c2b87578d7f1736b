//! Invocation scheduling
//!
//! Callers pace their checks to respect provider rate limits. Two patterns
//! are supported: strictly sequential with an inter-call delay, and small
//! fixed-size concurrent batches with an inter-batch delay. Either way the
//! reconciler reassembles results in request order.

use std::time::Duration;

/// How a sequence of checks is dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// One check at a time, sleeping `delay` between calls
    Sequential {
        /// Pause between consecutive checks
        delay: Duration,
    },
    /// `size` checks in flight at once, sleeping `delay` between batches
    Batched {
        /// Number of concurrent checks per batch (at least 1)
        size: usize,
        /// Pause between consecutive batches
        delay: Duration,
    },
}

impl Default for Schedule {
    fn default() -> Self {
        Self::sequential()
    }
}

impl Schedule {
    /// Sequential dispatch with no pacing
    pub fn sequential() -> Self {
        Schedule::Sequential {
            delay: Duration::ZERO,
        }
    }

    /// Sequential dispatch pausing `delay` between calls
    pub fn sequential_with_delay(delay: Duration) -> Self {
        Schedule::Sequential { delay }
    }

    /// Batched dispatch of `size` concurrent checks with `delay` between
    /// batches
    pub fn batched(size: usize, delay: Duration) -> Self {
        Schedule::Batched { size, delay }
    }

    /// Effective batch size (a zero size degenerates to 1)
    pub fn batch_size(&self) -> usize {
        match self {
            Schedule::Sequential { .. } => 1,
            Schedule::Batched { size, .. } => (*size).max(1),
        }
    }

    /// Pause applied between dispatch rounds
    pub fn delay(&self) -> Duration {
        match self {
            Schedule::Sequential { delay } | Schedule::Batched { delay, .. } => *delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_batch_size_degenerates_to_one() {
        let s = Schedule::batched(0, Duration::ZERO);
        assert_eq!(s.batch_size(), 1);
    }

    #[test]
    fn sequential_is_a_batch_of_one() {
        assert_eq!(Schedule::sequential().batch_size(), 1);
        assert_eq!(Schedule::sequential().delay(), Duration::ZERO);
    }

    #[test]
    fn batched_reports_its_parameters() {
        let s = Schedule::batched(5, Duration::from_secs(2));
        assert_eq!(s.batch_size(), 5);
        assert_eq!(s.delay(), Duration::from_secs(2));
    }
}
