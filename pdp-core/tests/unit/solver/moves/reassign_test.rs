use super::*;
use crate::helpers::models::*;
use crate::models::problem::Problem;
use std::sync::Arc;

fn create_problem() -> Arc<Problem> {
    create_test_problem(
        vec![test_vehicle(0, 0, 10), test_vehicle(1, 0, 2), test_vehicle(2, 0, 5)],
        vec![test_task(0, 1, 2, 3), test_task(1, 2, 3, 1)],
        create_line_topology(&[0., 10., 20., 30.]),
    )
}

parameterized_test! {can_reassign_task_to_vehicles_with_enough_capacity, (task, expected), {
    let solution = create_test_solution(create_problem(), vec![(0, vec![1, 2, -2, -1]), (1, vec![]), (2, vec![])]);

    let neighbours = ReassignMove::default().generate(&solution, 0, task);

    let actual = neighbours
        .iter()
        .map(|neighbour| neighbour.routes().iter().map(get_route_actions).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    assert_eq!(actual, expected);
    assert!(neighbours.iter().all(|neighbour| neighbour.is_feasible()));
}}

can_reassign_task_to_vehicles_with_enough_capacity! {
    case01_heavy_task: (0, vec![vec![vec![2, -2], vec![], vec![1, -1]]]),
    case02_light_task: (1, vec![
        vec![vec![1, -1], vec![2, -2], vec![]],
        vec![vec![1, -1], vec![], vec![2, -2]],
    ]),
}

#[test]
fn can_append_task_to_non_empty_route() {
    let solution = create_test_solution(create_problem(), vec![(0, vec![1, -1]), (1, vec![]), (2, vec![2, -2])]);

    let neighbours = ReassignMove::default().generate(&solution, 0, 0);

    assert_eq!(neighbours.len(), 1);
    assert!(neighbours[0].routes()[0].is_empty());
    assert_eq!(get_route_actions(&neighbours[0].routes()[2]), vec![2, -2, 1, -1]);
    assert_eq!(get_route_actions(&solution.routes()[0]), vec![1, -1]);
}

#[test]
fn can_return_no_neighbours_for_single_vehicle() {
    let problem = create_test_problem(
        vec![test_vehicle(0, 0, 10)],
        vec![test_task(0, 1, 2, 3)],
        create_line_topology(&[0., 10., 20.]),
    );
    let solution = create_test_solution(problem, vec![(0, vec![1, -1])]);

    assert!(ReassignMove::default().generate(&solution, 0, 0).is_empty());
}
