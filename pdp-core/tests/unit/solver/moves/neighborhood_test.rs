use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::random::FakeRandom;
use crate::models::problem::Problem;

fn create_problem() -> Arc<Problem> {
    create_test_problem(
        vec![test_vehicle(0, 0, 10), test_vehicle(1, 0, 2), test_vehicle(2, 0, 5)],
        vec![test_task(0, 1, 2, 3), test_task(1, 2, 3, 1)],
        create_line_topology(&[0., 10., 20., 30.]),
    )
}

#[test]
fn can_return_no_neighbours_when_all_routes_are_empty() {
    let problem = create_test_problem(vec![test_vehicle(0, 0, 10)], vec![], create_line_topology(&[0.]));
    let solution = create_test_solution(problem, vec![(0, vec![])]);

    let neighbours = Neighborhood::default().explore(&solution, &FakeRandom::new(vec![], vec![]));

    assert!(neighbours.is_empty());
}

#[test]
fn can_move_first_task_of_selected_route() {
    let solution = create_test_solution(create_problem(), vec![(0, vec![1, -1]), (1, vec![]), (2, vec![2, -2])]);

    // picks the second non-empty route which is the route at index 2
    let neighbours = Neighborhood::default().explore(&solution, &FakeRandom::new(vec![1], vec![]));

    let actual = neighbours
        .iter()
        .map(|neighbour| neighbour.routes().iter().map(get_route_actions).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    assert_eq!(actual, vec![vec![vec![1, -1, 2, -2], vec![], vec![]], vec![vec![1, -1], vec![2, -2], vec![]]]);
}

#[test]
fn can_combine_neighbours_of_all_operators() {
    let solution = create_test_solution(create_problem(), vec![(0, vec![1, -1, 2, -2]), (1, vec![]), (2, vec![])]);

    let neighbours = Neighborhood::default().explore(&solution, &FakeRandom::new(vec![0], vec![]));

    // one reassignment to the third vehicle and five placements within the route
    assert_eq!(neighbours.len(), 6);
    assert_eq!(get_route_actions(&neighbours[0].routes()[2]), vec![1, -1]);
    assert!(neighbours.iter().all(|neighbour| neighbour.is_feasible()));
    assert!(neighbours.iter().all(|neighbour| neighbour.task_count() == 2));
}
