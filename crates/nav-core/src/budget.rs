//! Iteration and wall-clock bounds for the search and allocation loops.
//!
//! A [`SearchBudget`] is plain configuration.  Each query calls
//! [`SearchBudget::start`] to get its own [`BudgetTracker`], so concurrent
//! queries never share counters.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Upper bounds on one engine call.  `None` means unbounded (the default).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchBudget {
    /// Maximum loop iterations (node expansions, or allocation rounds).
    pub max_expansions: Option<u64>,
    /// Maximum wall-clock time for the call.
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    /// No bounds at all.
    pub const UNBOUNDED: SearchBudget = SearchBudget { max_expansions: None, time_limit: None };

    pub fn with_max_expansions(mut self, n: u64) -> Self {
        self.max_expansions = Some(n);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max_expansions.is_none() && self.time_limit.is_none()
    }

    /// Begin tracking one call against this budget.
    pub fn start(&self) -> BudgetTracker {
        BudgetTracker {
            budget:  *self,
            started: Instant::now(),
            steps:   0,
        }
    }
}

/// Raised when a call runs past its [`SearchBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deadline exceeded after {steps} steps ({elapsed:?})")]
pub struct BudgetExceeded {
    pub steps:   u64,
    pub elapsed: Duration,
}

/// Per-call counter created by [`SearchBudget::start`].
#[derive(Debug)]
pub struct BudgetTracker {
    budget:  SearchBudget,
    started: Instant,
    steps:   u64,
}

impl BudgetTracker {
    /// Count one iteration; fails once either bound is crossed.
    #[inline]
    pub fn step(&mut self) -> Result<(), BudgetExceeded> {
        self.steps += 1;
        if self.budget.is_unbounded() {
            return Ok(());
        }
        if let Some(max) = self.budget.max_expansions {
            if self.steps > max {
                return Err(self.exceeded());
            }
        }
        if let Some(limit) = self.budget.time_limit {
            if self.started.elapsed() > limit {
                return Err(self.exceeded());
            }
        }
        Ok(())
    }

    /// Iterations counted so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn exceeded(&self) -> BudgetExceeded {
        BudgetExceeded {
            steps:   self.steps,
            elapsed: self.started.elapsed(),
        }
    }
}
