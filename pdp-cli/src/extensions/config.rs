//! Planner configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

extern crate serde_json;

use pdp_core::auction::TimeBudgets;
use pdp_core::solver::SearchConfig;
use pdp_core::utils::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A seed used when configuration does not specify one.
pub const DEFAULT_SEED: u64 = 42;

/// A planner configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies local search configuration.
    pub search: Option<SearchSettings>,
    /// Specifies auction time budgets.
    pub budgets: Option<BudgetSettings>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentSettings>,
}

/// Local search settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchSettings {
    /// Max amount of iterations. Default is 50000.
    pub max_iterations: Option<usize>,
    /// Probability to keep current solution. Default is 0.4.
    pub choice_probability: Option<f64>,
    /// Cost tolerance for equally good neighbours. Default is 0.01.
    pub epsilon: Option<f64>,
    /// Share of a time budget used by search. Default is 0.95.
    pub time_ratio: Option<f64>,
}

/// Time budgets in milliseconds.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSettings {
    /// Setup budget. Default is 30000.
    pub setup_ms: Option<u64>,
    /// Bid budget. Default is 5000.
    pub bid_ms: Option<u64>,
    /// Final plan budget, also used by `solve`. Default is 30000.
    pub plan_ms: Option<u64>,
}

/// Environment settings.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct EnvironmentSettings {
    /// Random seed.
    pub seed: Option<u64>,
    /// Logging settings.
    pub logging: Option<LoggingSettings>,
}

/// Logging settings.
#[derive(Clone, Deserialize, Debug)]
pub struct LoggingSettings {
    /// Enables logging to stdout.
    pub enabled: bool,
}

impl Config {
    /// Overrides random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.environment.get_or_insert_with(EnvironmentSettings::default).seed = Some(seed);
        self
    }

    /// Overrides the plan budget.
    pub fn with_plan_budget(mut self, budget_ms: u64) -> Self {
        self.budgets.get_or_insert_with(BudgetSettings::default).plan_ms = Some(budget_ms);
        self
    }
}

/// Reads config from JSON.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates local search configuration. Values which are not specified are taken from defaults.
pub fn create_search_config(config: &Config) -> GenericResult<SearchConfig> {
    let defaults = SearchConfig::default();
    let settings = config.search.clone().unwrap_or_default();

    let search = SearchConfig {
        max_iterations: settings.max_iterations.unwrap_or(defaults.max_iterations),
        choice_probability: settings.choice_probability.unwrap_or(defaults.choice_probability),
        epsilon: settings.epsilon.unwrap_or(defaults.epsilon),
        time_ratio: settings.time_ratio.unwrap_or(defaults.time_ratio),
    };

    let mut errors = vec![];
    if !(0. ..=1.).contains(&search.choice_probability) {
        let probability = search.choice_probability;
        errors.push(GenericError::from(format!("choice probability should be in [0, 1], got: {probability}")));
    }
    if search.epsilon < 0. {
        errors.push(GenericError::from(format!("epsilon should not be negative, got: {}", search.epsilon)));
    }
    if search.time_ratio <= 0. || search.time_ratio > 1. {
        errors.push(GenericError::from(format!("time ratio should be in (0, 1], got: {}", search.time_ratio)));
    }

    if errors.is_empty() { Ok(search) } else { Err(GenericError::join_many(errors.as_slice(), ", ").into()) }
}

/// Creates auction time budgets.
pub fn create_time_budgets(config: &Config) -> TimeBudgets {
    let defaults = TimeBudgets::default();
    let settings = config.budgets.clone().unwrap_or_default();

    TimeBudgets {
        setup: settings.setup_ms.unwrap_or(defaults.setup),
        bid: settings.bid_ms.unwrap_or(defaults.bid),
        plan: settings.plan_ms.unwrap_or(defaults.plan),
    }
}

/// Creates an environment with seeded random and a logger.
pub fn create_environment(config: &Config) -> Arc<Environment> {
    let settings = config.environment.clone().unwrap_or_default();
    let seed = settings.seed.unwrap_or(DEFAULT_SEED);
    let is_logging = settings.logging.is_none_or(|logging| logging.enabled);

    let logger = if is_logging { create_stdout_logger() } else { create_silent_logger() };

    Arc::new(Environment::new(Arc::new(DefaultRandom::new_with_seed(seed)), logger))
}
