#[cfg(test)]
#[path = "../../tests/unit/solver/local_search_test.rs"]
mod local_search_test;

use super::moves::Neighborhood;
use super::telemetry::{SearchStatistics, Telemetry};
use super::SearchConfig;
use crate::models::solution::Solution;
use crate::utils::{Environment, Quota, Random, compare_floats};
use std::sync::Arc;

/// An anytime stochastic local search: walks from a solution to one of its neighbours on every
/// iteration and remembers the best solution seen.
pub struct LocalSearch {
    config: SearchConfig,
    neighborhood: Neighborhood,
}

impl LocalSearch {
    /// Creates a new instance of `LocalSearch`.
    pub fn new(config: SearchConfig, neighborhood: Neighborhood) -> Self {
        Self { config, neighborhood }
    }

    /// Runs the search starting from the given solution until max iterations are done or quota
    /// is reached. Returns the best solution found, which is the initial one at least.
    pub fn search(
        &self,
        initial: Solution,
        quota: &dyn Quota,
        environment: &Environment,
    ) -> (Arc<Solution>, SearchStatistics) {
        let random = environment.random.as_ref();
        let mut telemetry = Telemetry::new(environment.logger.clone(), initial.total_cost());

        let mut current = Arc::new(initial);
        let mut best = current.clone();

        if current.task_count() > 0 {
            for _ in 0..self.config.max_iterations {
                if quota.is_reached() {
                    break;
                }

                let neighbours = self.neighborhood.explore(current.as_ref(), random);
                if let Some(next) = self.local_choice(neighbours, random) {
                    current = Arc::new(next);
                }

                telemetry.on_iteration();

                if current.total_cost() < best.total_cost() {
                    best = current.clone();
                    telemetry.on_improvement(best.total_cost());
                }
            }
        }

        (best, telemetry.on_result())
    }

    /// Keeps current solution with configured probability. Otherwise, picks uniformly one of the
    /// neighbours which cost is within epsilon of the cheapest one.
    fn local_choice(&self, neighbours: Vec<Solution>, random: &(dyn Random + Send + Sync)) -> Option<Solution> {
        if neighbours.is_empty() || random.is_hit(self.config.choice_probability) {
            return None;
        }

        let min_cost = neighbours.iter().map(|solution| solution.total_cost()).min_by(|a, b| compare_floats(*a, *b))?;

        let mut best_tied = neighbours
            .into_iter()
            .filter(|solution| solution.total_cost() - min_cost < self.config.epsilon)
            .collect::<Vec<_>>();

        let idx = random.uniform_int(0, best_tied.len() as i32 - 1) as usize;

        Some(best_tied.swap_remove(idx))
    }
}
