//! Vehicle plans: a flat list of primitive actions consumed outside of the planner.

#[cfg(test)]
#[path = "../../tests/unit/models/plan_test.rs"]
mod plan_test;

use crate::models::common::{Cost, Distance, Location};
use crate::models::problem::{Problem, TransportCost, Vehicle};
use crate::models::solution::{ActionKind, Route};
use std::sync::Arc;

/// A primitive plan action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanAction {
    /// Move to the neighbour city.
    Move(Location),
    /// Pick up a task with given id at the current city.
    Pickup(usize),
    /// Deliver a task with given id at the current city.
    Delivery(usize),
}

/// A plan of one vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    /// Vehicle id.
    pub vehicle: usize,
    /// Location where the plan starts.
    pub start: Location,
    /// Actions in the order they are performed.
    pub actions: Vec<PlanAction>,
}

impl Plan {
    /// Creates a plan without actions.
    pub fn new_empty(vehicle: &Vehicle) -> Self {
        Self { vehicle: vehicle.id, start: vehicle.home, actions: vec![] }
    }

    /// Converts route into a plan inserting moves along the shortest paths between action locations.
    pub fn from_route(route: &Route, problem: &Problem) -> Self {
        let vehicle = route.get_vehicle(problem);

        let (_, actions) = route.actions().iter().fold(
            (vehicle.home, Vec::with_capacity(route.len() * 2)),
            |(current, mut actions), action| {
                let task = action.get_task(problem);
                let next = action.location(problem);

                actions.extend(problem.transport.path(current, next).into_iter().map(PlanAction::Move));
                actions.push(match action.kind {
                    ActionKind::Pickup => PlanAction::Pickup(task.id),
                    ActionKind::Delivery => PlanAction::Delivery(task.id),
                });

                (next, actions)
            },
        );

        Self { vehicle: vehicle.id, start: vehicle.home, actions }
    }

    /// Returns true if plan has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns ids of tasks picked up in the plan.
    pub fn task_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.actions.iter().filter_map(|action| match action {
            PlanAction::Pickup(id) => Some(*id),
            _ => None,
        })
    }

    /// Returns total distance travelled by moves.
    pub fn total_distance(&self, transport: &(dyn TransportCost + Send + Sync)) -> Distance {
        self.actions
            .iter()
            .fold((self.start, 0.), |(current, total), action| match action {
                PlanAction::Move(next) => (*next, total + transport.distance(current, *next)),
                _ => (current, total),
            })
            .1
    }

    /// Returns plan cost for the given vehicle.
    pub fn cost(&self, vehicle: &Vehicle, transport: &(dyn TransportCost + Send + Sync)) -> Cost {
        self.total_distance(transport) * vehicle.cost_per_km
    }
}

/// Returns total cost of plans which are ordered as given vehicles.
pub fn get_plans_cost(
    plans: &[Plan],
    vehicles: &[Arc<Vehicle>],
    transport: &(dyn TransportCost + Send + Sync),
) -> Cost {
    plans.iter().zip(vehicles.iter()).map(|(plan, vehicle)| plan.cost(vehicle, transport)).sum()
}
