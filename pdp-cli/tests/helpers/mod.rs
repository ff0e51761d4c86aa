//! Test helpers.

#![allow(missing_docs)]


use pdp_core::auction::*;
use pdp_core::models::plan::{Plan, PlanAction};
use pdp_core::models::problem::{Task, Vehicle};
use pdp_core::utils::GenericResult;
use std::sync::{Arc, Mutex};

pub const PROBLEM_PATH: &str = "../data/problem.json";
pub const FULL_CONFIG_PATH: &str = "../data/config/config.full.json";
pub const MIN_CONFIG_PATH: &str = "../data/config/config.min.json";

/// Cities on a line: A(0), B(10), C(20) without explicit roads.
pub fn create_line_problem_json(tasks: &str, agents: Option<&str>) -> String {
    let agents = agents.map(|agents| format!(r#", "agents": {agents}"#)).unwrap_or_default();

    format!(
        r#"{{
          "topology": {{"cities": [
            {{"name": "A", "x": 0, "y": 0}},
            {{"name": "B", "x": 10, "y": 0}},
            {{"name": "C", "x": 20, "y": 0}}
          ]}},
          "vehicles": [
            {{"id": 0, "home": "A", "capacity": 10, "costPerKm": 1}},
            {{"id": 1, "home": "C", "capacity": 5, "costPerKm": 2}}
          ],
          "tasks": {tasks}{agents}
        }}"#
    )
}

/// Keeps notifications received by `FakeBehavior`: task id, winner and bids.
pub type Notifications = Arc<Mutex<Vec<(usize, AgentId, Vec<Bid>)>>>;

/// An agent which always bids the same value and serves all tasks with its first vehicle.
pub struct FakeBehavior {
    bid: Option<Bid>,
    notifications: Notifications,
    skip_tasks: bool,
}

impl FakeBehavior {
    pub fn new(bid: Option<Bid>, notifications: Notifications) -> Self {
        Self { bid, notifications, skip_tasks: false }
    }

    /// Creates an agent which returns plans without tasks.
    pub fn new_forgetful(bid: Bid) -> Self {
        Self { bid: Some(bid), notifications: Notifications::default(), skip_tasks: true }
    }
}

impl AuctionBehavior for FakeBehavior {
    fn setup(&mut self, _: AgentInfo, _: TimeBudgets) {}

    fn ask_price(&mut self, task: &Arc<Task>) -> GenericResult<Bid> {
        self.bid.ok_or_else(|| format!("cannot serve task {}", task.id).into())
    }

    fn auction_result(&mut self, task: &Arc<Task>, winner: AgentId, bids: &[Bid]) {
        self.notifications.lock().unwrap().push((task.id, winner, bids.to_vec()));
    }

    fn plan(&mut self, vehicles: &[Arc<Vehicle>], tasks: &[Arc<Task>]) -> GenericResult<Vec<Plan>> {
        Ok(vehicles
            .iter()
            .enumerate()
            .map(|(idx, vehicle)| {
                let mut plan = Plan::new_empty(vehicle);
                if idx == 0 && !self.skip_tasks {
                    plan.actions = tasks
                        .iter()
                        .flat_map(|task| [PlanAction::Pickup(task.id), PlanAction::Delivery(task.id)])
                        .collect();
                }
                plan
            })
            .collect())
    }
}
