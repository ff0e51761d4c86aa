use crate::utils::{DefaultRandom, Environment, Random, create_silent_logger};
use std::sync::Arc;


pub fn create_test_environment() -> Arc<Environment> {
    create_test_environment_with_random(Arc::new(DefaultRandom::new_repeatable()))
}

pub fn create_test_environment_with_random(random: Arc<dyn Random + Send + Sync>) -> Arc<Environment> {
    Arc::new(Environment::new(random, create_silent_logger()))
}
