#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use crate::utils::{Float, Timer};

/// Specifies a computational quota for a search run.
/// The main purpose is to allow to stop the search in reaction to external events such
/// as a wall-clock deadline.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A quota which is reached when the given share of a time budget has elapsed. A zero limit is
/// reached immediately.
pub struct TimeQuota {
    start: Timer,
    limit_in_millis: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota` with a limit in milliseconds.
    pub fn new(limit_in_millis: Float) -> Self {
        Self { start: Timer::start(), limit_in_millis }
    }

    /// Creates a quota which keeps `1 - ratio` of the budget in reserve for the caller.
    pub fn from_budget(budget_millis: u64, ratio: Float) -> Self {
        Self::new(budget_millis as Float * ratio.clamp(0., 1.))
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed_millis()
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_millis_as_float() >= self.limit_in_millis
    }
}
