//! This module contains the logic to build an initial feasible solution.
//!
//! The initial solution is intentionally simple: all tasks are served one after another by the
//! vehicle with the largest capacity. It is feasible by construction and the local search is
//! responsible to improve it.

use crate::models::common::Weight;
use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

mod builder;
pub use self::builder::create_initial_solution;

/// An error returned when a task cannot be carried by any vehicle of the fleet, including the case
/// of an empty fleet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfeasibleTaskError {
    /// Id of the task.
    pub task_id: usize,
    /// Weight of the task.
    pub weight: Weight,
    /// The largest capacity in the fleet, zero if fleet is empty.
    pub max_capacity: Weight,
}

impl Display for InfeasibleTaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "task {} with weight {} exceeds the largest vehicle capacity {}",
            self.task_id, self.weight, self.max_capacity
        )
    }
}

impl std::error::Error for InfeasibleTaskError {}

impl From<InfeasibleTaskError> for GenericError {
    fn from(value: InfeasibleTaskError) -> Self {
        GenericError::from(value.to_string())
    }
}
