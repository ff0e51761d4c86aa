use super::*;

fn create_cities() -> Vec<City> {
    vec![City::new("A", 0., 0.), City::new("B", 3., 4.), City::new("C", 6., 8.)]
}

#[test]
fn can_use_euclidean_distances_without_roads() {
    let topology = Topology::new(create_cities(), None).unwrap();

    assert_eq!(topology.size(), 3);
    assert_eq!(topology.distance(0, 1), 5.);
    assert_eq!(topology.distance(0, 2), 10.);
    assert_eq!(topology.distance(2, 0), 10.);
    assert_eq!(topology.distance(1, 1), 0.);
    assert_eq!(topology.path(0, 2), vec![2]);
    assert!(topology.path(1, 1).is_empty());
}

#[test]
fn can_find_shortest_paths_with_roads() {
    let roads = vec![
        Road { from: 0, to: 1, distance: 10. },
        Road { from: 1, to: 2, distance: 10. },
        Road { from: 0, to: 2, distance: 30. },
    ];

    let topology = Topology::new(create_cities(), Some(roads)).unwrap();

    assert_eq!(topology.distance(0, 2), 20.);
    assert_eq!(topology.distance(2, 0), 20.);
    assert_eq!(topology.path(0, 2), vec![1, 2]);
    assert_eq!(topology.path(2, 0), vec![1, 0]);
    assert_eq!(topology.path(0, 1), vec![1]);
}

parameterized_test! {can_detect_invalid_roads, (roads, expected_msg), {
    let result = Topology::new(create_cities(), Some(roads));

    match result {
        Err(err) => assert!(err.to_string().contains(expected_msg), "unexpected error: {err}"),
        Ok(_) => unreachable!("topology should not be created"),
    }
}}

can_detect_invalid_roads! {
    case01_unreachable: (vec![Road { from: 0, to: 1, distance: 1. }], "is not reachable"),
    case02_negative: (
        vec![Road { from: 0, to: 1, distance: -1. }, Road { from: 1, to: 2, distance: 1. }],
        "invalid distance"
    ),
    case03_unknown_city: (vec![Road { from: 0, to: 5, distance: 1. }], "unknown city"),
}

#[test]
fn can_find_location_by_name() {
    let topology = Topology::new(create_cities(), None).unwrap();

    assert_eq!(topology.location("B"), Some(1));
    assert_eq!(topology.location("D"), None);
    assert_eq!(topology.city(2).map(|city| city.name.as_str()), Some("C"));
}

#[test]
fn can_create_empty_topology() {
    let topology = Topology::new(vec![], None).unwrap();

    assert_eq!(topology.size(), 0);
}
