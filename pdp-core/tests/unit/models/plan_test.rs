use super::*;
use crate::helpers::models::*;
use crate::models::solution::{Action, Solution};
use crate::models::topology::{City, Road, Topology};

fn create_road_topology() -> Arc<Topology> {
    let cities = vec![City::new("A", 0., 0.), City::new("B", 10., 0.), City::new("C", 20., 0.)];
    let roads = vec![Road { from: 0, to: 1, distance: 10. }, Road { from: 1, to: 2, distance: 10. }];

    Arc::new(Topology::new(cities, Some(roads)).unwrap())
}

#[test]
fn can_create_plan_with_moves_along_roads() {
    let problem =
        create_test_problem(vec![test_vehicle(7, 0, 10)], vec![test_task(3, 2, 0, 1)], create_road_topology());
    let route = Route::new_with_actions(0, vec![Action::pickup(0), Action::delivery(0)]);
    let solution = Solution::new(problem.clone(), vec![route]);

    let plan = Plan::from_route(&solution.routes()[0], &problem);

    assert_eq!(plan.vehicle, 7);
    assert_eq!(plan.start, 0);
    assert_eq!(
        plan.actions,
        vec![
            PlanAction::Move(1),
            PlanAction::Move(2),
            PlanAction::Pickup(3),
            PlanAction::Move(1),
            PlanAction::Move(0),
            PlanAction::Delivery(3),
        ]
    );
    assert_eq!(plan.total_distance(problem.transport.as_ref()), solution.routes()[0].distance(&problem));
    assert_eq!(plan.cost(&problem.vehicles[0], problem.transport.as_ref()), 40.);
}

#[test]
fn can_skip_moves_when_action_is_at_current_city() {
    let problem =
        create_test_problem(vec![test_vehicle(0, 1, 10)], vec![test_task(0, 1, 2, 1)], create_road_topology());
    let solution = create_test_solution(problem.clone(), vec![(0, vec![1, -1])]);

    let plan = Plan::from_route(&solution.routes()[0], &problem);

    assert_eq!(plan.actions, vec![PlanAction::Pickup(0), PlanAction::Move(2), PlanAction::Delivery(0)]);
}

#[test]
fn can_create_empty_plan() {
    let vehicle = test_vehicle(2, 1, 10);
    let transport = create_road_topology();

    let plan = Plan::new_empty(&vehicle);

    assert!(plan.is_empty());
    assert_eq!(plan.start, 1);
    assert_eq!(plan.total_distance(transport.as_ref()), 0.);
}

#[test]
fn can_get_plans_cost() {
    let vehicles = vec![
        Arc::new(Vehicle { id: 0, home: 0, capacity: 10, cost_per_km: 2. }),
        Arc::new(Vehicle { id: 1, home: 2, capacity: 10, cost_per_km: 1. }),
    ];
    let transport = create_road_topology();
    let plans = vec![
        Plan { vehicle: 0, start: 0, actions: vec![PlanAction::Move(1), PlanAction::Pickup(0)] },
        Plan { vehicle: 1, start: 2, actions: vec![PlanAction::Move(1), PlanAction::Move(0)] },
    ];

    assert_eq!(get_plans_cost(plans.as_slice(), vehicles.as_slice(), transport.as_ref()), 40.);
}
