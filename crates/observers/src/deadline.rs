use std::time::{Duration, Instant};

use exemplar_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a search once a wall-clock budget has elapsed.
///
/// The clock starts when the deadline is created. The check happens on each
/// event, so a search stops at the first event after the budget runs out and
/// returns the best sample found so far.
///
/// Strategies only emit events for complete candidates. The path search
/// solves the memoized subproblems behind its first starting pair before it
/// emits anything, so most of its work happens before the first check.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Creates a deadline that expires `budget` from now.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Returns the budget.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns whether the budget has run out.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.budget
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.expired().then(A::stop_early)
    }
}
