//! Time and iteration budgets for a single decision.
//!
//! Search loops poll the budget cooperatively: once at the top of every
//! iteration, and inside rollouts. Work already started always completes, so
//! the deadline is a soft ceiling.

use std::time::{Duration, Instant};

/// Stop condition for one decision.
///
/// A budget may carry a wall-clock deadline, an iteration cap, or both; the
/// first limit reached stops the search. Iteration caps keep tests
/// deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Budget {
    deadline: Option<Instant>,
    max_iterations: Option<u32>,
}

impl Budget {
    /// Stop at the given instant.
    #[must_use]
    pub fn until(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            max_iterations: None,
        }
    }

    /// Stop once `timeout` has elapsed from now.
    #[must_use]
    pub fn from_timeout(timeout: Duration) -> Self {
        Self::until(Instant::now() + timeout)
    }

    /// Stop after a fixed number of search iterations.
    #[must_use]
    pub fn iterations(max_iterations: u32) -> Self {
        Self {
            deadline: None,
            max_iterations: Some(max_iterations),
        }
    }

    /// Add an iteration cap to this budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// True once the wall-clock deadline has passed.
    ///
    /// A budget without a deadline never expires on time.
    #[must_use]
    pub fn past_deadline(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// True once either limit has been reached.
    #[must_use]
    pub fn should_stop(&self, iterations_done: u32) -> bool {
        if self.max_iterations.is_some_and(|max| iterations_done >= max) {
            return true;
        }
        self.past_deadline()
    }
}
