//! A minimal sequential sealed-bid auction host.
//!
//! Tasks are offered one at a time in the given order. Every agent is asked for a price, the
//! lowest bid wins the task (ties are resolved in favour of the lowest agent id) and all agents
//! are notified about the outcome. When all tasks are sold, every agent is asked for plans which
//! serve exactly the tasks it has won.

#[cfg(test)]
#[path = "../../tests/unit/extensions/auction_test.rs"]
mod auction_test;

use pdp_core::auction::{AgentId, AgentInfo, AuctionBehavior, Bid, TimeBudgets};
use pdp_core::models::plan::{Plan, get_plans_cost};
use pdp_core::models::problem::{Task, TransportCost, Vehicle};
use pdp_core::utils::{GenericResult, InfoLogger, Timer};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// An auction participant.
pub struct AuctionAgent {
    /// Agent id.
    pub id: AgentId,
    /// Vehicles owned by the agent.
    pub vehicles: Vec<Arc<Vehicle>>,
    /// Agent's bidding strategy.
    pub behavior: Box<dyn AuctionBehavior>,
}

/// An outcome of one auction round.
pub struct AuctionRound {
    /// Offered task.
    pub task: Arc<Task>,
    /// Bids ordered by agent id, `None` when agent failed to bid.
    pub bids: Vec<(AgentId, Option<Bid>)>,
    /// Round winner, `None` when no agent was able to bid.
    pub winner: Option<AgentId>,
}

/// Final results of one agent.
pub struct AgentOutcome {
    /// Agent id.
    pub id: AgentId,
    /// Agent's vehicles.
    pub vehicles: Vec<Arc<Vehicle>>,
    /// Won tasks in the order they were sold.
    pub tasks: Vec<Arc<Task>>,
    /// Final plans ordered as agent's vehicles.
    pub plans: Vec<Plan>,
    /// Total cost of the plans.
    pub cost: f64,
}

/// An outcome of the whole auction.
pub struct AuctionOutcome {
    /// Rounds in the order tasks were offered.
    pub rounds: Vec<AuctionRound>,
    /// Agents ordered by id.
    pub agents: Vec<AgentOutcome>,
}

/// Runs an auction between agents. Agents which fail to bid are skipped in the round and get
/// `Bid::MAX` in place of their bid in the notification.
pub struct AuctionHost {
    agents: Vec<AuctionAgent>,
    transport: Arc<dyn TransportCost + Send + Sync>,
    budgets: TimeBudgets,
    logger: InfoLogger,
}

impl AuctionHost {
    /// Creates a new instance of `AuctionHost`.
    pub fn new(
        agents: Vec<AuctionAgent>,
        transport: Arc<dyn TransportCost + Send + Sync>,
        budgets: TimeBudgets,
        logger: InfoLogger,
    ) -> Self {
        let mut agents = agents;
        agents.sort_by_key(|agent| agent.id);

        Self { agents, transport, budgets, logger }
    }

    /// Sells the tasks and collects final plans.
    pub fn run(mut self, tasks: &[Arc<Task>]) -> GenericResult<AuctionOutcome> {
        let timer = Timer::start();

        self.agents.iter_mut().for_each(|agent| {
            let info = AgentInfo { id: agent.id, vehicles: agent.vehicles.clone(), transport: self.transport.clone() };
            agent.behavior.setup(info, self.budgets.clone());
        });

        let rounds = tasks.iter().map(|task| self.sell(task)).collect::<Vec<_>>();

        let agents = std::mem::take(&mut self.agents)
            .into_iter()
            .map(|agent| self.collect_plans(agent, rounds.as_slice()))
            .collect::<GenericResult<Vec<_>>>()?;

        self.log(format!("[{}ms] auction completed: {} tasks offered", timer.elapsed_millis(), tasks.len()).as_str());

        Ok(AuctionOutcome { rounds, agents })
    }

    fn sell(&mut self, task: &Arc<Task>) -> AuctionRound {
        let bids = self
            .agents
            .iter_mut()
            .map(|agent| match agent.behavior.ask_price(task) {
                Ok(bid) => (agent.id, Some(bid)),
                Err(err) => {
                    (self.logger)(format!("agent {} cannot bid for task {}: {err}", agent.id, task.id).as_str());
                    (agent.id, None)
                }
            })
            .collect::<Vec<_>>();

        // agents are sorted by id, so the first lowest bid wins ties
        let winner = bids
            .iter()
            .filter_map(|&(agent_id, bid)| bid.map(|bid| (agent_id, bid)))
            .min_by_key(|&(agent_id, bid)| (bid, agent_id))
            .map(|(agent_id, _)| agent_id);

        match winner {
            Some(winner) => {
                let notification = bids.iter().map(|(_, bid)| bid.unwrap_or(Bid::MAX)).collect::<Vec<_>>();
                self.agents.iter_mut().for_each(|agent| agent.behavior.auction_result(task, winner, &notification));
                self.log(format!("task {} is sold to agent {winner}", task.id).as_str());
            }
            None => self.log(format!("task {} is not sold: no valid bids", task.id).as_str()),
        }

        AuctionRound { task: task.clone(), bids, winner }
    }

    fn collect_plans(&self, agent: AuctionAgent, rounds: &[AuctionRound]) -> GenericResult<AgentOutcome> {
        let AuctionAgent { id, vehicles, mut behavior } = agent;

        let tasks = rounds
            .iter()
            .filter(|round| round.winner == Some(id))
            .map(|round| round.task.clone())
            .collect::<Vec<_>>();

        let plans = behavior.plan(vehicles.as_slice(), tasks.as_slice())?;

        let planned = plans.iter().flat_map(|plan| plan.task_ids()).collect::<Vec<_>>();
        let expected = tasks.iter().map(|task| task.id).collect::<FxHashSet<_>>();
        if plans.len() != vehicles.len()
            || planned.len() != expected.len()
            || planned.iter().any(|task_id| !expected.contains(task_id))
        {
            return Err(format!("agent {id} returned plans which do not match its vehicles and won tasks").into());
        }

        let cost = get_plans_cost(plans.as_slice(), vehicles.as_slice(), self.transport.as_ref());

        Ok(AgentOutcome { id, vehicles, tasks, plans, cost })
    }

    fn log(&self, message: &str) {
        (self.logger)(message)
    }
}
