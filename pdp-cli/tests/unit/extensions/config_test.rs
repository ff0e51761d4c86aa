use super::*;
use crate::helpers::*;
use std::fs::File;

#[test]
fn can_read_full_config() {
    let file = File::open(FULL_CONFIG_PATH).expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    let search = create_search_config(&config).unwrap();
    assert_eq!(search, SearchConfig { max_iterations: 2000, choice_probability: 0.4, epsilon: 0.01, time_ratio: 0.9 });
    assert_eq!(create_time_budgets(&config), TimeBudgets { setup: 1000, bid: 500, plan: 1000 });
    let environment = config.environment.expect("no environment config");
    assert_eq!(environment.seed, Some(7));
    assert!(!environment.logging.expect("no logging config").enabled);
}

#[test]
fn can_use_defaults_for_missing_values() {
    let file = File::open(MIN_CONFIG_PATH).expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    assert_eq!(create_search_config(&config).unwrap(), SearchConfig { max_iterations: 500, ..SearchConfig::default() });
    assert_eq!(create_time_budgets(&config), TimeBudgets::default());
    assert_eq!(create_search_config(&Config::default()).unwrap(), SearchConfig::default());
}

#[test]
fn can_override_seed_and_plan_budget() {
    let config = Config::default().with_seed(11).with_plan_budget(250);

    assert_eq!(config.environment.as_ref().and_then(|environment| environment.seed), Some(11));
    assert_eq!(create_time_budgets(&config), TimeBudgets { plan: 250, ..TimeBudgets::default() });
}

#[test]
fn can_create_reproducible_environment() {
    let config = Config::default().with_seed(3);
    let sample =
        |environment: Arc<Environment>| (0..10).map(|_| environment.random.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(sample(create_environment(&config)), sample(create_environment(&config)));
}

parameterized_test! {can_detect_invalid_search_settings, (json, expected), {
    let config = read_config(BufReader::new(json.as_bytes())).unwrap();

    let result = create_search_config(&config);

    assert!(result.err().is_some_and(|err| err.to_string().contains(expected)));
}}

can_detect_invalid_search_settings! {
    case01_probability: (r#"{"search": {"choiceProbability": 1.5}}"#, "choice probability should be in [0, 1]"),
    case02_epsilon: (r#"{"search": {"epsilon": -0.1}}"#, "epsilon should not be negative"),
    case03_time_ratio: (r#"{"search": {"timeRatio": 0}}"#, "time ratio should be in (0, 1]"),
}

#[test]
fn can_reject_malformed_config() {
    let result = read_config(BufReader::new("{\"search\": 1}".as_bytes()));

    assert!(result.err().is_some_and(|err| err.to_string().contains("cannot deserialize config")));
}
