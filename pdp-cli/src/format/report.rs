//! An auction report in JSON format.

#[cfg(test)]
#[path = "../../tests/unit/format/report_test.rs"]
mod report_test;

extern crate serde_json;

use super::solution::{VehiclePlan, create_vehicle_plan};
use crate::extensions::auction::AuctionOutcome;
use pdp_core::auction::{AgentId, Bid};
use pdp_core::models::topology::Topology as CoreTopology;
use pdp_core::utils::{GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A bid placed by an agent.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentBid {
    /// Agent id.
    pub agent_id: AgentId,
    /// A bid, absent when agent failed to bid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Bid>,
}

/// An outcome of one auction round.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Offered task id.
    pub task_id: usize,
    /// Bids ordered by agent id.
    pub bids: Vec<AgentBid>,
    /// Winner id, absent when nobody was able to bid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<AgentId>,
}

/// Final results of one agent.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    /// Agent id.
    pub agent_id: AgentId,
    /// Ids of won tasks.
    pub tasks: Vec<usize>,
    /// Plans ordered as agent's vehicles.
    pub plans: Vec<VehiclePlan>,
    /// Total cost of the plans.
    pub cost: f64,
    /// Sum of won task rewards.
    pub reward: i64,
    /// Reward minus cost.
    pub profit: f64,
}

/// An auction report.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Report {
    /// Rounds in the order tasks were offered.
    pub rounds: Vec<Round>,
    /// Agents ordered by id.
    pub agents: Vec<AgentSummary>,
}

/// Creates a report from the auction outcome.
pub fn create_report(outcome: &AuctionOutcome, topology: &CoreTopology) -> Report {
    let rounds = outcome
        .rounds
        .iter()
        .map(|round| Round {
            task_id: round.task.id,
            bids: round.bids.iter().map(|&(agent_id, bid)| AgentBid { agent_id, bid }).collect(),
            winner: round.winner,
        })
        .collect();

    let agents = outcome
        .agents
        .iter()
        .map(|agent| {
            let plans = agent
                .plans
                .iter()
                .zip(agent.vehicles.iter())
                .map(|(plan, vehicle)| create_vehicle_plan(plan, vehicle, topology))
                .collect::<Vec<_>>();
            let cost = plans.iter().map(|plan| plan.cost).sum::<f64>();
            let reward = agent.tasks.iter().map(|task| task.reward).sum::<i64>();

            AgentSummary {
                agent_id: agent.id,
                tasks: agent.tasks.iter().map(|task| task.id).collect(),
                plans,
                cost,
                reward,
                profit: reward as f64 - cost,
            }
        })
        .collect();

    Report { rounds, agents }
}

/// Serializes report into JSON.
pub fn serialize_report<W: Write>(mut writer: BufWriter<W>, report: &Report) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|err| GenericError::from(format!("cannot serialize report: '{err}'")))?;

    Ok(writer.flush()?)
}

/// Deserializes report from JSON.
pub fn deserialize_report<R: Read>(reader: BufReader<R>) -> GenericResult<Report> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize report: '{err}'").into())
}
