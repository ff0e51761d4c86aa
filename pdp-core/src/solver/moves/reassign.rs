#[cfg(test)]
#[path = "../../../tests/unit/solver/moves/reassign_test.rs"]
mod reassign_test;

use super::MoveOperator;
use crate::models::solution::Solution;

/// Moves the task to the end of every other route which vehicle can carry the task.
#[derive(Default)]
pub struct ReassignMove {}

impl MoveOperator for ReassignMove {
    fn generate(&self, solution: &Solution, route_idx: usize, task: usize) -> Vec<Solution> {
        let problem = solution.problem();
        let weight = problem.tasks[task].weight;

        solution
            .routes()
            .iter()
            .enumerate()
            .filter(|(target_idx, route)| *target_idx != route_idx && route.get_vehicle(problem).capacity >= weight)
            .map(|(target_idx, _)| {
                solution.derive(|routes| {
                    routes[route_idx].remove_task(task);
                    routes[target_idx].push_task(task);
                })
            })
            .collect()
    }
}
