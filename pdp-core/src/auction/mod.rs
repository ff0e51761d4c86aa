//! This module contains the logic to take part in a sealed-bid auction for tasks.
//!
//! A host offers tasks one by one. For every task, an agent answers with a bid, then learns the
//! winner. When all tasks are sold, the host asks every agent for plans which serve exactly the
//! tasks it has won.

use crate::models::plan::Plan;
use crate::models::problem::{Task, TransportCost, Vehicle};
use crate::utils::GenericResult;
use std::sync::Arc;

mod bidder;
pub use self::bidder::{Commitment, MarginalCostBidder};

/// An agent identity.
pub type AgentId = usize;

/// A bid value.
pub type Bid = u64;

/// Time limits given to an agent for each phase of the auction, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeBudgets {
    /// Limit for the setup call.
    pub setup: u64,
    /// Limit to answer a price query.
    pub bid: u64,
    /// Limit to return final plans.
    pub plan: u64,
}

impl Default for TimeBudgets {
    fn default() -> Self {
        Self { setup: 30_000, bid: 5_000, plan: 30_000 }
    }
}

/// Information given to an agent on setup.
#[derive(Clone)]
pub struct AgentInfo {
    /// Agent's identity.
    pub id: AgentId,
    /// Vehicles owned by the agent.
    pub vehicles: Vec<Arc<Vehicle>>,
    /// Transport costs of the road network.
    pub transport: Arc<dyn TransportCost + Send + Sync>,
}

/// Specifies the calls an auction host makes on an agent. Calls are made sequentially: one
/// auction round (`ask_price`, then `auction_result`) is resolved before the next task is offered.
pub trait AuctionBehavior {
    /// Prepares the agent for a new auction.
    fn setup(&mut self, agent: AgentInfo, budgets: TimeBudgets);

    /// Returns a bid for the task.
    fn ask_price(&mut self, task: &Arc<Task>) -> GenericResult<Bid>;

    /// Notifies about the outcome of the last round: the winner and all bids ordered by agent id.
    fn auction_result(&mut self, task: &Arc<Task>, winner: AgentId, bids: &[Bid]);

    /// Returns plans ordered as `vehicles` which serve exactly given tasks.
    fn plan(&mut self, vehicles: &[Arc<Vehicle>], tasks: &[Arc<Task>]) -> GenericResult<Vec<Plan>>;
}
