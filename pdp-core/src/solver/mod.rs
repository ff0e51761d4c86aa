//! This module contains the stochastic local search which improves an initial solution within
//! a time budget.
//!
//! # Search
//!
//! On every iteration, the search picks a random non-empty route, takes the task of its first
//! pending action and generates all neighbours by moving that task to another vehicle or to
//! another position within the same route. Then it either stays where it is (exploration) or
//! moves to one of the cheapest neighbours (exploitation). The best solution seen is returned.
//!
//! # Examples
//!
//! ```
//! use pdp_core::prelude::*;
//! use std::sync::Arc;
//!
//! let cities = vec![City::new("A", 0., 0.), City::new("B", 10., 0.), City::new("C", 20., 0.)];
//! let topology = Arc::new(Topology::new(cities, None).unwrap());
//! let vehicles = vec![
//!     Arc::new(Vehicle { id: 0, home: 0, capacity: 5, cost_per_km: 1. }),
//!     Arc::new(Vehicle { id: 1, home: 2, capacity: 10, cost_per_km: 1. }),
//! ];
//! let tasks = vec![
//!     Arc::new(Task { id: 0, pickup: 0, delivery: 1, weight: 3, reward: 10 }),
//!     Arc::new(Task { id: 1, pickup: 2, delivery: 1, weight: 3, reward: 10 }),
//! ];
//! let problem = Arc::new(Problem::new(vehicles, tasks, topology));
//!
//! let config = SearchConfig { max_iterations: 200, ..SearchConfig::default() };
//! let solver = Solver::new(config, Arc::new(Environment::new_silent(42)));
//! let result = solver.solve(problem, 1000).unwrap();
//!
//! assert!(result.solution.is_feasible());
//! assert_eq!(result.plans.len(), 2);
//! assert!(result.statistics.best_cost <= result.statistics.initial_cost);
//! ```

use crate::construction::{InfeasibleTaskError, create_initial_solution};
use crate::models::plan::Plan;
use crate::models::problem::Problem;
use crate::models::solution::Solution;
use crate::utils::{Environment, Float, TimeQuota};
use std::sync::Arc;

mod local_search;
pub use self::local_search::LocalSearch;

pub mod moves;

mod telemetry;
pub use self::telemetry::SearchStatistics;

use self::moves::Neighborhood;

/// Specifies local search parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Max amount of iterations.
    pub max_iterations: usize,
    /// Probability to keep the current solution on an iteration.
    pub choice_probability: Float,
    /// Cost tolerance to treat neighbours as equally good.
    pub epsilon: Float,
    /// Share of the time budget which the search is allowed to use.
    pub time_ratio: Float,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_iterations: 50_000, choice_probability: 0.4, epsilon: 0.01, time_ratio: 0.95 }
    }
}

/// A result of the solver run.
pub struct SolverResult {
    /// The best solution found.
    pub solution: Arc<Solution>,
    /// Plans of the best solution ordered as problem vehicles.
    pub plans: Vec<Plan>,
    /// Search statistics.
    pub statistics: SearchStatistics,
}

/// Builds an initial solution and improves it with the local search.
pub struct Solver {
    config: SearchConfig,
    environment: Arc<Environment>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(config: SearchConfig, environment: Arc<Environment>) -> Self {
        Self { config, environment }
    }

    /// Solves the problem within the given time budget in milliseconds.
    pub fn solve(&self, problem: Arc<Problem>, budget_millis: u64) -> Result<SolverResult, InfeasibleTaskError> {
        let quota = TimeQuota::from_budget(budget_millis, self.config.time_ratio);
        let initial = create_initial_solution(problem)?;

        let search = LocalSearch::new(self.config.clone(), Neighborhood::default());
        let (solution, statistics) = search.search(initial, &quota, self.environment.as_ref());
        let plans = solution.to_plans();

        Ok(SolverResult { solution, plans, statistics })
    }
}
