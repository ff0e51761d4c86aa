#[cfg(test)]
#[path = "../../tests/unit/construction/builder_test.rs"]
mod builder_test;

use super::InfeasibleTaskError;
use crate::models::problem::Problem;
use crate::models::solution::{Route, Solution};
use std::cmp::Reverse;
use std::sync::Arc;

/// Creates an initial solution: vehicles are sorted by capacity in descending order and every
/// task's pickup immediately followed by its delivery is assigned to the first (largest) one.
/// Other vehicles get empty routes.
pub fn create_initial_solution(problem: Arc<Problem>) -> Result<Solution, InfeasibleTaskError> {
    let max_capacity = problem.max_capacity();

    let is_infeasible = |weight| problem.vehicles.is_empty() || weight > max_capacity;

    if let Some(task) = problem.tasks.iter().find(|task| is_infeasible(task.weight)) {
        return Err(InfeasibleTaskError { task_id: task.id, weight: task.weight, max_capacity });
    }

    let mut vehicle_indices = (0..problem.vehicles.len()).collect::<Vec<_>>();
    vehicle_indices.sort_by_key(|&idx| Reverse(problem.vehicles[idx].capacity));

    let routes = vehicle_indices
        .into_iter()
        .enumerate()
        .map(|(order, vehicle_idx)| {
            let mut route = Route::new(vehicle_idx);
            if order == 0 {
                (0..problem.tasks.len()).for_each(|task| route.push_task(task));
            }

            route
        })
        .collect();

    Ok(Solution::new(problem, routes))
}
