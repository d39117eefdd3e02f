//! Wall-clock budget for iterative deepening

use std::time::{Duration, Instant};

use thiserror::Error;

/// The search ran past its deadline; every score computed under it is void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search deadline exceeded")]
pub struct Timeout;

/// Monotonic start time plus a budget.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Start the clock now.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[inline]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// True once elapsed time is strictly past the budget.
    #[inline]
    pub fn expired(&self) -> bool {
        self.elapsed() > self.budget
    }

    /// `Err(Timeout)` once the budget is spent.
    #[inline]
    pub fn check(&self) -> Result<(), Timeout> {
        if self.expired() {
            Err(Timeout)
        } else {
            Ok(())
        }
    }
}
