//! A module which provides the logic to collect statistics about a search run and simple logging.

use crate::models::common::Cost;
use crate::utils::{InfoLogger, Timer};

/// Encapsulates measurements regarding one search run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchStatistics {
    /// Amount of completed iterations.
    pub iterations: usize,
    /// Amount of times a new best solution was found.
    pub improvements: usize,
    /// Search duration in milliseconds.
    pub duration_ms: u128,
    /// Cost of the initial solution.
    pub initial_cost: Cost,
    /// Cost of the best solution.
    pub best_cost: Cost,
}

/// Collects search statistics and writes progress into log.
pub(crate) struct Telemetry {
    timer: Timer,
    logger: InfoLogger,
    statistics: SearchStatistics,
}

impl Telemetry {
    pub fn new(logger: InfoLogger, initial_cost: Cost) -> Self {
        Self {
            timer: Timer::start(),
            logger,
            statistics: SearchStatistics { initial_cost, best_cost: initial_cost, ..SearchStatistics::default() },
        }
    }

    pub fn on_iteration(&mut self) {
        self.statistics.iterations += 1;
    }

    pub fn on_improvement(&mut self, cost: Cost) {
        self.statistics.improvements += 1;
        self.statistics.best_cost = cost;
        self.log(format!("[{}ms] new minimum found: {cost:.2}", self.timer.elapsed_millis()).as_str());
    }

    pub fn on_result(mut self) -> SearchStatistics {
        self.statistics.duration_ms = self.timer.elapsed_millis();
        self.log(
            format!(
                "[{}ms] search completed: {} iterations, {} improvements, cost {:.2} -> {:.2}",
                self.statistics.duration_ms,
                self.statistics.iterations,
                self.statistics.improvements,
                self.statistics.initial_cost,
                self.statistics.best_cost
            )
            .as_str(),
        );

        self.statistics
    }

    fn log(&self, message: &str) {
        (self.logger)(message)
    }
}
