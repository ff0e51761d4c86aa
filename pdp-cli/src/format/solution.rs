//! A solution in JSON format: per vehicle plans with primitive steps.

#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

extern crate serde_json;

use pdp_core::models::common::Location;
use pdp_core::models::plan::{Plan, PlanAction};
use pdp_core::models::problem::Vehicle as CoreVehicle;
use pdp_core::models::topology::Topology as CoreTopology;
use pdp_core::solver::SearchStatistics;
use pdp_core::utils::{GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use std::sync::Arc;

/// A primitive step of a vehicle plan.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Step {
    /// Move to the neighbour city.
    Move {
        /// City name.
        city: String,
    },
    /// Pick up the task in the current city.
    Pickup {
        /// Task id.
        task: usize,
    },
    /// Deliver the task in the current city.
    Delivery {
        /// Task id.
        task: usize,
    },
}

/// A plan of one vehicle.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePlan {
    /// Vehicle id.
    pub vehicle_id: usize,
    /// Name of the city where plan starts.
    pub start: String,
    /// Steps in the order they are performed.
    pub steps: Vec<Step>,
    /// Travelled distance.
    pub distance: f64,
    /// Plan cost.
    pub cost: f64,
}

/// Search statistics.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Amount of search iterations.
    pub iterations: usize,
    /// Amount of found improvements.
    pub improvements: usize,
    /// Search duration in milliseconds.
    pub duration_ms: u64,
    /// Cost of the initial solution.
    pub initial_cost: f64,
    /// Cost of the returned solution.
    pub best_cost: f64,
}

/// A solution of a planning problem.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Plans ordered as problem vehicles.
    pub plans: Vec<VehiclePlan>,
    /// Total cost of all plans.
    pub total_cost: f64,
    /// Search statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

/// Creates a vehicle plan in JSON format.
pub fn create_vehicle_plan(plan: &Plan, vehicle: &CoreVehicle, topology: &CoreTopology) -> VehiclePlan {
    let get_name = |location: Location| {
        topology.city(location).map(|city| city.name.clone()).unwrap_or_else(|| location.to_string())
    };

    let steps = plan
        .actions
        .iter()
        .map(|action| match action {
            PlanAction::Move(location) => Step::Move { city: get_name(*location) },
            PlanAction::Pickup(task) => Step::Pickup { task: *task },
            PlanAction::Delivery(task) => Step::Delivery { task: *task },
        })
        .collect();

    VehiclePlan {
        vehicle_id: plan.vehicle,
        start: get_name(plan.start),
        steps,
        distance: plan.total_distance(topology),
        cost: plan.cost(vehicle, topology),
    }
}

/// Creates a solution from plans ordered as given vehicles.
pub fn create_solution(
    plans: &[Plan],
    vehicles: &[Arc<CoreVehicle>],
    topology: &CoreTopology,
    statistics: Option<&SearchStatistics>,
) -> Solution {
    let plans = plans
        .iter()
        .zip(vehicles.iter())
        .map(|(plan, vehicle)| create_vehicle_plan(plan, vehicle, topology))
        .collect::<Vec<_>>();
    let total_cost = plans.iter().map(|plan| plan.cost).sum();

    let statistics = statistics.map(|statistics| Statistics {
        iterations: statistics.iterations,
        improvements: statistics.improvements,
        duration_ms: u64::try_from(statistics.duration_ms).unwrap_or(u64::MAX),
        initial_cost: statistics.initial_cost,
        best_cost: statistics.best_cost,
    });

    Solution { plans, total_cost, statistics }
}

/// Serializes solution into JSON.
pub fn serialize_solution<W: Write>(mut writer: BufWriter<W>, solution: &Solution) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, solution)
        .map_err(|err| GenericError::from(format!("cannot serialize solution: '{err}'")))?;

    Ok(writer.flush()?)
}

/// Deserializes solution from JSON.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> GenericResult<Solution> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize solution: '{err}'").into())
}
