#[cfg(test)]
#[path = "../../../tests/unit/solver/moves/reorder_test.rs"]
mod reorder_test;

use super::MoveOperator;
use crate::models::common::Weight;
use crate::models::solution::{Action, Route, Solution};

/// Reinserts the task's pickup and delivery at every pair of positions within its own route.
///
/// The pickup is always placed before the delivery, placements which exceed vehicle capacity
/// are not generated and the placement equal to the current route is skipped.
#[derive(Default)]
pub struct ReorderMove {}

impl MoveOperator for ReorderMove {
    fn generate(&self, solution: &Solution, route_idx: usize, task: usize) -> Vec<Solution> {
        let problem = solution.problem();
        let route = &solution.routes()[route_idx];

        let (Some(pickup_idx), Some(delivery_idx)) =
            (route.position(&Action::pickup(task)), route.position(&Action::delivery(task)))
        else {
            return vec![];
        };

        let capacity = route.get_vehicle(problem).capacity;
        let weight = problem.tasks[task].weight;

        let mut base = route.clone();
        base.remove_task(task);
        let loads = base.loads(problem);
        let size = base.len();

        // in base coordinates: pickup goes before base[i], delivery goes before base[j], i <= j
        let current = (pickup_idx, delivery_idx - 1);

        let mut neighbours = vec![];
        for i in 0..=size {
            let load_before = if i == 0 { 0 } else { loads[i - 1] };
            if !can_carry(load_before, weight, capacity) {
                continue;
            }

            for j in i..=size {
                if (i, j) != current {
                    let actions = insert_task(&base, task, i, j);
                    neighbours.push(solution.derive(|routes| {
                        routes[route_idx] = Route::new_with_actions(base.vehicle_idx(), actions);
                    }));
                }

                // delivery cannot be moved past an action which would overload the vehicle
                if j < size && !can_carry(loads[j], weight, capacity) {
                    break;
                }
            }
        }

        neighbours
    }
}

fn can_carry(load: Weight, weight: Weight, capacity: Weight) -> bool {
    load.checked_add(weight).is_some_and(|load| load <= capacity)
}

fn insert_task(base: &Route, task: usize, pickup_idx: usize, delivery_idx: usize) -> Vec<Action> {
    let actions = base.actions();
    let mut result = Vec::with_capacity(actions.len() + 2);

    result.extend_from_slice(&actions[..pickup_idx]);
    result.push(Action::pickup(task));
    result.extend_from_slice(&actions[pickup_idx..delivery_idx]);
    result.push(Action::delivery(task));
    result.extend_from_slice(&actions[delivery_idx..]);

    result
}
