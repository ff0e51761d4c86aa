use super::*;
use crate::helpers::models::*;

fn create_problem(capacities: &[u32], weights: &[u32]) -> Arc<Problem> {
    create_test_problem(
        capacities.iter().enumerate().map(|(idx, &capacity)| test_vehicle(idx, 0, capacity)).collect(),
        weights.iter().enumerate().map(|(idx, &weight)| test_task(idx, 1, 2, weight)).collect(),
        create_line_topology(&[0., 10., 20.]),
    )
}

#[test]
fn can_assign_all_tasks_to_largest_vehicle() {
    let problem = create_problem(&[5, 10, 7], &[3, 4, 5]);

    let solution = create_initial_solution(problem).unwrap();

    let vehicles = solution.routes().iter().map(|route| route.vehicle_idx()).collect::<Vec<_>>();
    assert_eq!(vehicles, vec![1, 2, 0]);
    assert_eq!(get_route_actions(&solution.routes()[0]), vec![1, -1, 2, -2, 3, -3]);
    assert!(solution.routes()[1].is_empty());
    assert!(solution.routes()[2].is_empty());
    assert!(solution.is_feasible());
}

#[test]
fn can_keep_input_order_for_vehicles_with_same_capacity() {
    let problem = create_problem(&[10, 10, 10], &[1]);

    let solution = create_initial_solution(problem).unwrap();

    let vehicles = solution.routes().iter().map(|route| route.vehicle_idx()).collect::<Vec<_>>();
    assert_eq!(vehicles, vec![0, 1, 2]);
    assert_eq!(get_route_actions(&solution.routes()[0]), vec![1, -1]);
}

#[test]
fn can_create_empty_solution_without_tasks() {
    let problem = create_problem(&[5, 10], &[]);

    let solution = create_initial_solution(problem).unwrap();

    assert_eq!(solution.routes().len(), 2);
    assert_eq!(solution.total_cost(), 0.);
    assert!(solution.to_plans().iter().all(|plan| plan.is_empty()));
}

parameterized_test! {can_detect_infeasible_task, (capacities, weights, expected), {
    let (task_id, weight, max_capacity) = expected;
    let problem = create_problem(&capacities, &weights);

    let result = create_initial_solution(problem);

    assert_eq!(result.err(), Some(InfeasibleTaskError { task_id, weight, max_capacity }));
}}

can_detect_infeasible_task! {
    case01_too_heavy: (vec![5, 10], vec![3, 11], (1, 11, 10)),
    case02_empty_fleet: (Vec::<u32>::new(), vec![1], (0, 1, 0)),
    case03_empty_fleet_weightless_task: (Vec::<u32>::new(), vec![0], (0, 0, 0)),
}

#[test]
fn can_create_solution_for_empty_fleet_without_tasks() {
    let problem = create_problem(&[], &[]);

    let solution = create_initial_solution(problem).unwrap();

    assert!(solution.routes().is_empty());
    assert!(solution.is_feasible());
}
