//! This module reimports commonly used types.

pub use crate::auction::{AgentId, AgentInfo, AuctionBehavior, Bid, MarginalCostBidder, TimeBudgets};

pub use crate::construction::{InfeasibleTaskError, create_initial_solution};

pub use crate::models::common::{Cost, Distance, Location, Weight};
pub use crate::models::plan::{Plan, PlanAction};
pub use crate::models::problem::{Problem, Task, TransportCost, Vehicle};
pub use crate::models::solution::{Action, ActionKind, Route, Solution};
pub use crate::models::topology::{City, Road, Topology};

pub use crate::solver::{SearchConfig, SearchStatistics, Solver, SolverResult};

pub use crate::utils::{DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Random};
pub use crate::utils::{Quota, TimeQuota, Timer};
