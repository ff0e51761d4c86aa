//! Problem definition: tasks, vehicles, and the way to measure distance between locations.

#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::common::{Cost, Distance, Location, Weight};
use std::sync::Arc;

/// Represents a pickup and delivery request.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    /// A task id, unique within a problem.
    pub id: usize,
    /// Location where the task is picked up.
    pub pickup: Location,
    /// Location where the task is delivered.
    pub delivery: Location,
    /// A task weight.
    pub weight: Weight,
    /// A reward paid for delivering the task.
    pub reward: i64,
}

/// Represents a vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    /// A vehicle id.
    pub id: usize,
    /// Location where vehicle starts.
    pub home: Location,
    /// Max weight which can be carried at the same time.
    pub capacity: Weight,
    /// Cost per distance unit.
    pub cost_per_km: Cost,
}

/// Provides the way to get distance information between locations.
pub trait TransportCost {
    /// Returns travel distance between two locations.
    fn distance(&self, from: Location, to: Location) -> Distance;

    /// Returns locations visited when travelling from `from` to `to`, excluding `from` and
    /// including `to`. Returns an empty path when both locations are the same.
    fn path(&self, from: Location, to: Location) -> Vec<Location>;
}

/// Defines a planning problem: which tasks have to be served by which vehicles.
pub struct Problem {
    /// Vehicles in the order supplied by the caller.
    pub vehicles: Vec<Arc<Vehicle>>,
    /// Tasks to be served.
    pub tasks: Vec<Arc<Task>>,
    /// Transport costs.
    pub transport: Arc<dyn TransportCost + Send + Sync>,
}

impl Problem {
    /// Creates a new instance of `Problem`.
    pub fn new(
        vehicles: Vec<Arc<Vehicle>>,
        tasks: Vec<Arc<Task>>,
        transport: Arc<dyn TransportCost + Send + Sync>,
    ) -> Self {
        Self { vehicles, tasks, transport }
    }

    /// Returns the largest capacity in the fleet or zero for an empty fleet.
    pub fn max_capacity(&self) -> Weight {
        self.vehicles.iter().map(|vehicle| vehicle.capacity).max().unwrap_or(0)
    }
}
