use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the planner.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an environment with a seeded random generator and a logger which writes to stdout.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_with_seed(seed)), create_stdout_logger())
    }

    /// Creates an environment with a seeded random generator which does not log anything.
    pub fn new_silent(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_with_seed(seed)), create_silent_logger())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), create_stdout_logger())
    }
}

/// Creates a logger which prints messages to stdout.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

/// Creates a logger which ignores all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
