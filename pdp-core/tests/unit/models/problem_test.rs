use super::*;
use crate::helpers::models::*;

parameterized_test! {can_get_max_capacity, (capacities, expected), {
    let vehicles = capacities.iter().enumerate().map(|(idx, &capacity)| test_vehicle(idx, 0, capacity)).collect();
    let problem = create_test_problem(vehicles, vec![], create_line_topology(&[0.]));

    assert_eq!(problem.max_capacity(), expected);
}}

can_get_max_capacity! {
    case01_many: (vec![5, 10, 7], 10),
    case02_single: (vec![3], 3),
    case03_empty: (Vec::<Weight>::new(), 0),
}
