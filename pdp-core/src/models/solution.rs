//! Solution model: per vehicle chains of pickup and delivery actions and their costs.

#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::common::{Cost, Distance, Location, Weight};
use crate::models::plan::Plan;
use crate::models::problem::{Problem, Task, Vehicle};
use std::sync::{Arc, OnceLock};

/// Specifies an action kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Task is loaded into the vehicle.
    Pickup,
    /// Task is unloaded from the vehicle.
    Delivery,
}

/// An action performed for a task. Task is referenced by its index in [`Problem::tasks`].
/// The twin of an action is the action of the other kind for the same task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// Task index in the problem.
    pub task: usize,
    /// Action kind.
    pub kind: ActionKind,
}

impl Action {
    /// Creates a pickup action.
    pub fn pickup(task: usize) -> Self {
        Self { task, kind: ActionKind::Pickup }
    }

    /// Creates a delivery action.
    pub fn delivery(task: usize) -> Self {
        Self { task, kind: ActionKind::Delivery }
    }

    /// Returns the twin action for the same task.
    pub fn twin(&self) -> Self {
        match self.kind {
            ActionKind::Pickup => Self::delivery(self.task),
            ActionKind::Delivery => Self::pickup(self.task),
        }
    }

    /// Returns a task referenced by the action.
    pub fn get_task<'a>(&self, problem: &'a Problem) -> &'a Arc<Task> {
        &problem.tasks[self.task]
    }

    /// Returns location where the action is performed.
    pub fn location(&self, problem: &Problem) -> Location {
        let task = self.get_task(problem);
        match self.kind {
            ActionKind::Pickup => task.pickup,
            ActionKind::Delivery => task.delivery,
        }
    }
}

/// Represents an ordered chain of actions performed by one vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    vehicle: usize,
    actions: Vec<Action>,
}

impl Route {
    /// Creates an empty route for the vehicle with the given index in [`Problem::vehicles`].
    pub fn new(vehicle: usize) -> Self {
        Self { vehicle, actions: vec![] }
    }

    /// Creates a route with given actions.
    pub fn new_with_actions(vehicle: usize, actions: Vec<Action>) -> Self {
        Self { vehicle, actions }
    }

    /// Returns vehicle index in the problem.
    pub fn vehicle_idx(&self) -> usize {
        self.vehicle
    }

    /// Returns the vehicle which performs the route.
    pub fn get_vehicle<'a>(&self, problem: &'a Problem) -> &'a Arc<Vehicle> {
        &problem.vehicles[self.vehicle]
    }

    /// Returns all actions in the order they are performed.
    pub fn actions(&self) -> &[Action] {
        self.actions.as_slice()
    }

    /// Returns the first pending action, if any.
    pub fn next_action(&self) -> Option<&Action> {
        self.actions.first()
    }

    /// Returns true if route has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns amount of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns position of the action in the route.
    pub fn position(&self, action: &Action) -> Option<usize> {
        self.actions.iter().position(|other| other == action)
    }

    /// Returns position of the twin of the action at given position.
    pub fn twin_position(&self, idx: usize) -> Option<usize> {
        self.actions.get(idx).and_then(|action| self.position(&action.twin()))
    }

    /// Returns task indices served by the route in the order of their pickups.
    pub fn tasks(&self) -> impl Iterator<Item = usize> + '_ {
        self.actions.iter().filter(|action| action.kind == ActionKind::Pickup).map(|action| action.task)
    }

    /// Appends task's pickup immediately followed by its delivery.
    pub fn push_task(&mut self, task: usize) {
        self.actions.push(Action::pickup(task));
        self.actions.push(Action::delivery(task));
    }

    /// Removes both actions of the task. Returns false if task is not in the route.
    pub fn remove_task(&mut self, task: usize) -> bool {
        let size = self.actions.len();
        self.actions.retain(|action| action.task != task);

        size != self.actions.len()
    }

    /// Returns carried weight after each action.
    pub fn loads(&self, problem: &Problem) -> Vec<Weight> {
        self.actions
            .iter()
            .scan(0, |load: &mut Weight, action| {
                let weight = action.get_task(problem).weight;
                *load = match action.kind {
                    ActionKind::Pickup => load.saturating_add(weight),
                    ActionKind::Delivery => load.saturating_sub(weight),
                };
                Some(*load)
            })
            .collect()
    }

    /// Checks that every task is picked up once before it is delivered once and that
    /// carried weight never exceeds vehicle capacity.
    pub fn is_feasible(&self, problem: &Problem) -> bool {
        let capacity = self.get_vehicle(problem).capacity;

        let is_ordered = self.actions.iter().enumerate().all(|(idx, action)| {
            let twin = self.position(&action.twin());
            let is_unique = self.actions.iter().filter(|other| *other == action).count() == 1;

            is_unique
                && match (action.kind, twin) {
                    (ActionKind::Pickup, Some(twin)) => twin > idx,
                    (ActionKind::Delivery, Some(twin)) => twin < idx,
                    _ => false,
                }
        });

        let is_within_capacity = self
            .actions
            .iter()
            .try_fold(0 as Weight, |load, action| {
                let weight = action.get_task(problem).weight;
                match action.kind {
                    ActionKind::Pickup => load.checked_add(weight).filter(|&load| load <= capacity),
                    ActionKind::Delivery => Some(load.saturating_sub(weight)),
                }
            })
            .is_some();

        is_ordered && is_within_capacity
    }

    /// Returns route distance including the leg from the vehicle's home to the first action.
    pub fn distance(&self, problem: &Problem) -> Distance {
        let start = self.get_vehicle(problem).home;

        self.actions
            .iter()
            .fold((start, 0.), |(from, total), action| {
                let to = action.location(problem);
                (to, total + problem.transport.distance(from, to))
            })
            .1
    }

    /// Returns route cost: distance multiplied by vehicle's cost per distance unit.
    pub fn cost(&self, problem: &Problem) -> Cost {
        self.distance(problem) * self.get_vehicle(problem).cost_per_km
    }
}

/// A complete assignment of all problem tasks to vehicle routes.
///
/// A solution is not modified after creation: moves produce a new solution via [`Solution::derive`].
/// Total cost is calculated on the first request and cached.
#[derive(Clone)]
pub struct Solution {
    problem: Arc<Problem>,
    routes: Vec<Route>,
    cost: OnceLock<Cost>,
}

impl Solution {
    /// Creates a new instance of `Solution`.
    pub fn new(problem: Arc<Problem>, routes: Vec<Route>) -> Self {
        Self { problem, routes, cost: OnceLock::new() }
    }

    /// Returns the problem.
    pub fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    /// Returns all routes.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }

    /// Returns route of the vehicle with the given index in [`Problem::vehicles`].
    pub fn route_by_vehicle(&self, vehicle_idx: usize) -> Option<&Route> {
        self.routes.iter().find(|route| route.vehicle_idx() == vehicle_idx)
    }

    /// Returns indices of routes which have at least one pending action.
    pub fn non_empty_routes(&self) -> Vec<usize> {
        self.routes.iter().enumerate().filter(|(_, route)| !route.is_empty()).map(|(idx, _)| idx).collect()
    }

    /// Returns amount of assigned tasks.
    pub fn task_count(&self) -> usize {
        self.routes.iter().map(|route| route.len() / 2).sum()
    }

    /// Returns distance of every route in the order of [`Solution::routes`].
    pub fn distances(&self) -> Vec<Distance> {
        self.routes.iter().map(|route| route.distance(&self.problem)).collect()
    }

    /// Returns total fleet cost.
    pub fn total_cost(&self) -> Cost {
        *self.cost.get_or_init(|| self.routes.iter().map(|route| route.cost(&self.problem)).sum())
    }

    /// Creates a new solution by applying given changes to a copy of the routes.
    pub fn derive<F>(&self, changes: F) -> Self
    where
        F: FnOnce(&mut Vec<Route>),
    {
        let mut routes = self.routes.clone();
        changes(&mut routes);

        Self::new(self.problem.clone(), routes)
    }

    /// Checks that every task is served exactly once and all routes are feasible.
    pub fn is_feasible(&self) -> bool {
        let mut served = vec![0_usize; self.problem.tasks.len()];
        self.routes.iter().flat_map(|route| route.tasks()).for_each(|task| served[task] += 1);

        served.iter().all(|&count| count == 1) && self.routes.iter().all(|route| route.is_feasible(&self.problem))
    }

    /// Converts the solution into vehicle plans ordered as [`Problem::vehicles`].
    pub fn to_plans(&self) -> Vec<Plan> {
        (0..self.problem.vehicles.len())
            .map(|vehicle_idx| match self.route_by_vehicle(vehicle_idx) {
                Some(route) => Plan::from_route(route, &self.problem),
                None => Plan::new_empty(&self.problem.vehicles[vehicle_idx]),
            })
            .collect()
    }
}
