use super::*;
use crate::format::problem::Problem;
use pdp_core::utils::GenericResult;
use std::io::BufReader;

const CITIES: &str = "NAME,X,Y\nA,0,0\nB,3,4\nC,6,8\n";
const TASKS: &str = "ID,PICKUP,DELIVERY,WEIGHT,REWARD\n0,A,C,3,100\n1,C,B,2,40\n";

fn read_problem(vehicles: &str, roads: Option<&str>) -> GenericResult<Problem> {
    read_csv_problem(
        BufReader::new(CITIES.as_bytes()),
        BufReader::new(vehicles.as_bytes()),
        BufReader::new(TASKS.as_bytes()),
        roads.map(|roads| BufReader::new(roads.as_bytes())),
    )
}

#[test]
fn can_read_problem_with_agents_and_roads() {
    let vehicles = "ID,HOME,CAPACITY,COST_PER_KM,AGENT\n0,A,10,1.5,1\n1,B,20,2,0\n2,C,5,1,1\n";
    let roads = "FROM,TO,DISTANCE\nA,B,5\nB,C,\n";

    let problem = read_problem(vehicles, Some(roads)).unwrap();

    assert_eq!(problem.topology.cities.len(), 3);
    assert_eq!(problem.topology.cities[1].name, "B");
    let roads = problem.topology.roads.expect("no roads");
    assert_eq!(roads.len(), 2);
    assert_eq!(roads[0].distance, Some(5.));
    assert_eq!(roads[1].distance, None);
    assert_eq!(problem.vehicles.len(), 3);
    assert_eq!(problem.vehicles[0].cost_per_km, 1.5);
    assert_eq!(problem.tasks.len(), 2);
    assert_eq!(problem.tasks[1].delivery, "B");
    let agents = problem.agents.expect("no agents");
    let agents = agents.iter().map(|agent| (agent.id, agent.vehicles.clone())).collect::<Vec<_>>();
    assert_eq!(agents, vec![(1, vec![0, 2]), (0, vec![1])]);
}

#[test]
fn can_read_problem_without_agents_and_roads() {
    let vehicles = "ID,HOME,CAPACITY,COST_PER_KM\n0,A,10,1\n";

    let problem = read_problem(vehicles, None).unwrap();

    assert!(problem.topology.roads.is_none());
    assert!(problem.agents.is_none());
    assert_eq!(problem.vehicles[0].home, "A");
}

#[test]
fn can_propagate_format_error() {
    let vehicles = "ID,HOME,CAPACITY,COST_PER_KM\n0,A,ten,1\n";

    let result = read_problem(vehicles, None);

    assert!(result.err().is_some_and(|err| err.to_string().contains("cannot read vehicles")));
}
