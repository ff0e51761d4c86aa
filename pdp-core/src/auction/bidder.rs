#[cfg(test)]
#[path = "../../tests/unit/auction/bidder_test.rs"]
mod bidder_test;

use super::*;
use crate::models::common::Cost;
use crate::models::problem::Problem;
use crate::solver::{SearchConfig, Solver};
use crate::utils::{Environment, GenericError};
use rustc_hash::FxHashSet;

/// Tasks an agent is obliged to serve together with the plan which serves them and its cost.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Commitment {
    /// Tasks.
    pub tasks: Vec<Arc<Task>>,
    /// Plans ordered as agent's vehicles.
    pub plans: Vec<Plan>,
    /// Total cost of the plans.
    pub cost: Cost,
}

struct AgentContext {
    info: AgentInfo,
    budgets: TimeBudgets,
}

/// An agent which bids its marginal cost: the difference between the cost of the plan with the
/// offered task and the cost of the plan committed so far, plus one.
pub struct MarginalCostBidder {
    solver: Solver,
    environment: Arc<Environment>,
    context: Option<AgentContext>,
    committed: Commitment,
    pending: Option<(usize, Commitment)>,
}

impl MarginalCostBidder {
    /// Creates a new instance of `MarginalCostBidder`.
    pub fn new(config: SearchConfig, environment: Arc<Environment>) -> Self {
        Self {
            solver: Solver::new(config, environment.clone()),
            environment,
            context: None,
            committed: Commitment::default(),
            pending: None,
        }
    }

    /// Returns the current commitment.
    pub fn committed(&self) -> &Commitment {
        &self.committed
    }

    fn context(&self) -> GenericResult<&AgentContext> {
        self.context.as_ref().ok_or_else(|| GenericError::from("agent is not set up"))
    }

    fn optimize(&self, vehicles: &[Arc<Vehicle>], tasks: Vec<Arc<Task>>, budget: u64) -> GenericResult<Commitment> {
        let transport = self.context()?.info.transport.clone();
        let problem = Arc::new(Problem::new(vehicles.to_vec(), tasks.clone(), transport));

        let result = self.solver.solve(problem, budget)?;

        Ok(Commitment { tasks, plans: result.plans, cost: result.solution.total_cost() })
    }

    fn with_task(&self, task: &Arc<Task>) -> Vec<Arc<Task>> {
        let mut tasks = self.committed.tasks.clone();
        if tasks.iter().all(|other| other.id != task.id) {
            tasks.push(task.clone());
        }

        tasks
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}

impl AuctionBehavior for MarginalCostBidder {
    fn setup(&mut self, agent: AgentInfo, budgets: TimeBudgets) {
        self.log(
            format!(
                "agent {}: setup with {} vehicles, setup timeout {}ms, bid timeout {}ms, plan timeout {}ms",
                agent.id,
                agent.vehicles.len(),
                budgets.setup,
                budgets.bid,
                budgets.plan
            )
            .as_str(),
        );

        self.committed = Commitment {
            tasks: vec![],
            plans: agent.vehicles.iter().map(|vehicle| Plan::new_empty(vehicle)).collect(),
            cost: 0.,
        };
        self.pending = None;
        self.context = Some(AgentContext { info: agent, budgets });
    }

    fn ask_price(&mut self, task: &Arc<Task>) -> GenericResult<Bid> {
        let (agent_id, vehicles, budget) = {
            let context = self.context()?;
            (context.info.id, context.info.vehicles.clone(), context.budgets.bid)
        };

        let pending = self.optimize(vehicles.as_slice(), self.with_task(task), budget)?;

        let marginal_cost = pending.cost - self.committed.cost;
        let bid = marginal_cost.max(0.).trunc() as Bid + 1;

        self.log(format!("agent {agent_id}: task {} would cost {marginal_cost:.2}, bid {bid}", task.id).as_str());
        self.pending = Some((task.id, pending));

        Ok(bid)
    }

    fn auction_result(&mut self, task: &Arc<Task>, winner: AgentId, bids: &[Bid]) {
        let pending = self.pending.take();

        let Some((agent_id, vehicles, budget)) =
            self.context.as_ref().map(|context| (context.info.id, context.info.vehicles.clone(), context.budgets.bid))
        else {
            return;
        };

        if winner != agent_id {
            self.log(format!("agent {agent_id}: task {} lost to agent {winner}, bids: {bids:?}", task.id).as_str());
            return;
        }

        let commitment = match pending {
            Some((task_id, commitment)) if task_id == task.id => Ok(commitment),
            _ => self.optimize(vehicles.as_slice(), self.with_task(task), budget),
        };

        match commitment {
            Ok(commitment) => {
                self.committed = commitment;
                let cost = self.committed.cost;
                self.log(format!("agent {agent_id}: task {} won, new cost is {cost:.2}", task.id).as_str());
            }
            Err(err) => self.log(format!("agent {agent_id}: cannot commit to task {}: {err}", task.id).as_str()),
        }
    }

    fn plan(&mut self, vehicles: &[Arc<Vehicle>], tasks: &[Arc<Task>]) -> GenericResult<Vec<Plan>> {
        let (agent_id, budget) = {
            let context = self.context()?;
            (context.info.id, context.budgets.plan)
        };

        let fresh = self.optimize(vehicles, tasks.to_vec(), budget)?;

        let task_ids = |tasks: &[Arc<Task>]| tasks.iter().map(|task| task.id).collect::<FxHashSet<_>>();
        let is_same_tasks = task_ids(tasks) == task_ids(self.committed.tasks.as_slice());
        let is_same_vehicles = vehicles.len() == self.committed.plans.len()
            && vehicles.iter().zip(self.committed.plans.iter()).all(|(vehicle, plan)| vehicle.id == plan.vehicle);

        if !is_same_tasks || !is_same_vehicles || fresh.cost < self.committed.cost {
            self.log(format!("agent {agent_id}: final plan is recomputed with cost {:.2}", fresh.cost).as_str());
            Ok(fresh.plans)
        } else {
            let cost = self.committed.cost;
            self.log(format!("agent {agent_id}: final plan is committed one with cost {cost:.2}").as_str());
            Ok(self.committed.plans.clone())
        }
    }
}
