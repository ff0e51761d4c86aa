//! This module contains moves which produce neighbour solutions.
//!
//! A move is applied to one task of one route: the task whose pickup is the first pending
//! action of a randomly chosen non-empty route. All moves generate only feasible solutions.

#[cfg(test)]
#[path = "../../../tests/unit/solver/moves/neighborhood_test.rs"]
mod neighborhood_test;

use crate::models::solution::Solution;
use crate::utils::Random;
use std::sync::Arc;

mod reassign;
pub use self::reassign::ReassignMove;

mod reorder;
pub use self::reorder::ReorderMove;

/// Specifies behavior of a move operator.
pub trait MoveOperator {
    /// Generates all neighbours of the solution which are reachable by moving the given task
    /// (an index in the problem) served by the route at `route_idx`.
    fn generate(&self, solution: &Solution, route_idx: usize, task: usize) -> Vec<Solution>;
}

/// Combines multiple move operators applied to the same randomly selected task.
pub struct Neighborhood {
    operators: Vec<Arc<dyn MoveOperator + Send + Sync>>,
}

impl Neighborhood {
    /// Creates a new instance of `Neighborhood`.
    pub fn new(operators: Vec<Arc<dyn MoveOperator + Send + Sync>>) -> Self {
        Self { operators }
    }

    /// Selects a non-empty route uniformly at random, takes the task of its first pending action
    /// and returns the union of neighbours produced by all operators for that task.
    /// Returns an empty list when every route is empty.
    pub fn explore(&self, solution: &Solution, random: &(dyn Random + Send + Sync)) -> Vec<Solution> {
        let candidates = solution.non_empty_routes();
        if candidates.is_empty() {
            return vec![];
        }

        let route_idx = candidates[random.uniform_int(0, candidates.len() as i32 - 1) as usize];
        let Some(task) = solution.routes()[route_idx].next_action().map(|action| action.task) else {
            return vec![];
        };

        self.operators.iter().flat_map(|operator| operator.generate(solution, route_idx, task)).collect()
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new(vec![Arc::new(ReassignMove::default()), Arc::new(ReorderMove::default())])
    }
}
