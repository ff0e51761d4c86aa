//! A problem definition in JSON format and its mapping to the core models.

#[cfg(test)]
#[path = "../../tests/unit/format/problem_test.rs"]
mod problem_test;

extern crate serde_json;

use pdp_core::auction::AgentId;
use pdp_core::models::common::Location;
use pdp_core::models::problem::{Problem as CoreProblem, Task as CoreTask, Vehicle as CoreVehicle};
use pdp_core::models::topology::{City as CoreCity, Road as CoreRoad, Topology as CoreTopology};
use pdp_core::utils::{GenericError, GenericResult};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use std::sync::Arc;

// region Model

/// A city with planar coordinates.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct City {
    /// A unique city name.
    pub name: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// An undirected road between two cities.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Road {
    /// Name of the first city.
    pub from: String,
    /// Name of the second city.
    pub to: String,
    /// Road length. Euclidean distance between cities is used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// A road network.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Topology {
    /// Cities.
    pub cities: Vec<City>,
    /// Roads. When omitted, every pair of cities is connected directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roads: Option<Vec<Road>>,
}

/// A vehicle.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// A unique vehicle id.
    pub id: usize,
    /// Name of the city where vehicle starts.
    pub home: String,
    /// Max weight carried at the same time.
    pub capacity: u32,
    /// Cost per distance unit.
    pub cost_per_km: f64,
}

/// A pickup and delivery task.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Task {
    /// A unique task id.
    pub id: usize,
    /// Name of the pickup city.
    pub pickup: String,
    /// Name of the delivery city.
    pub delivery: String,
    /// Task weight.
    pub weight: u32,
    /// Reward paid for the task.
    pub reward: i64,
}

/// An auction participant owning some vehicles.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Agent {
    /// A unique agent id.
    pub id: AgentId,
    /// Ids of owned vehicles.
    pub vehicles: Vec<usize>,
}

/// A problem definition.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Problem {
    /// A road network.
    pub topology: Topology,
    /// All vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Tasks to be served.
    pub tasks: Vec<Task>,
    /// Auction participants. When omitted, a single agent owns every vehicle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<Agent>>,
}

// endregion

/// An auction participant with resolved vehicles.
pub struct AgentModel {
    /// Agent id.
    pub id: AgentId,
    /// Owned vehicles in the order of the problem definition.
    pub vehicles: Vec<Arc<CoreVehicle>>,
}

/// A problem with city names resolved into locations of the topology.
pub struct ProblemModel {
    /// A road network with precomputed shortest paths.
    pub topology: Arc<CoreTopology>,
    /// All vehicles.
    pub vehicles: Vec<Arc<CoreVehicle>>,
    /// All tasks in definition order.
    pub tasks: Vec<Arc<CoreTask>>,
    /// Auction participants ordered by id.
    pub agents: Vec<AgentModel>,
}

impl ProblemModel {
    /// Creates a problem where all tasks have to be served by all vehicles.
    pub fn create_problem(&self) -> CoreProblem {
        CoreProblem::new(self.vehicles.clone(), self.tasks.clone(), self.topology.clone())
    }
}

/// Reads problem defined in JSON format.
pub trait JsonProblem {
    /// Reads problem and maps it to the core models.
    fn read_json(self) -> GenericResult<ProblemModel>;
}

impl<R: Read> JsonProblem for BufReader<R> {
    fn read_json(self) -> GenericResult<ProblemModel> {
        deserialize_problem(self).and_then(|problem| map_to_model(&problem))
    }
}

impl JsonProblem for String {
    fn read_json(self) -> GenericResult<ProblemModel> {
        BufReader::new(self.as_bytes()).read_json()
    }
}

/// Deserializes problem from JSON.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> GenericResult<Problem> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize problem: '{err}'").into())
}

/// Serializes problem into JSON.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, problem).map_err(|err| format!("cannot serialize problem: '{err}'").into())
}

fn map_to_model(problem: &Problem) -> GenericResult<ProblemModel> {
    let topology = Arc::new(create_topology(&problem.topology)?);
    let get_location = |name: &str, entity: String| {
        topology.location(name).ok_or_else(|| GenericError::from(format!("unknown city '{name}' used in {entity}")))
    };

    check_unique_ids(problem.vehicles.iter().map(|vehicle| vehicle.id), "vehicle")?;
    check_unique_ids(problem.tasks.iter().map(|task| task.id), "task")?;

    let vehicles = problem
        .vehicles
        .iter()
        .map(|vehicle| {
            if !vehicle.cost_per_km.is_finite() || vehicle.cost_per_km < 0. {
                return Err(format!("vehicle {} has invalid cost per km: {}", vehicle.id, vehicle.cost_per_km).into());
            }

            Ok(Arc::new(CoreVehicle {
                id: vehicle.id,
                home: get_location(vehicle.home.as_str(), format!("vehicle {}", vehicle.id))?,
                capacity: vehicle.capacity,
                cost_per_km: vehicle.cost_per_km,
            }))
        })
        .collect::<GenericResult<Vec<_>>>()?;

    let tasks = problem
        .tasks
        .iter()
        .map(|task| {
            Ok(Arc::new(CoreTask {
                id: task.id,
                pickup: get_location(task.pickup.as_str(), format!("task {}", task.id))?,
                delivery: get_location(task.delivery.as_str(), format!("task {}", task.id))?,
                weight: task.weight,
                reward: task.reward,
            }))
        })
        .collect::<GenericResult<Vec<_>>>()?;

    let agents = create_agents(problem.agents.as_deref(), vehicles.as_slice())?;

    Ok(ProblemModel { topology, vehicles, tasks, agents })
}

fn create_topology(topology: &Topology) -> GenericResult<CoreTopology> {
    let cities =
        topology.cities.iter().map(|city| CoreCity::new(city.name.as_str(), city.x, city.y)).collect::<Vec<_>>();

    let mut index: FxHashMap<&str, Location> = FxHashMap::default();
    for (location, city) in topology.cities.iter().enumerate() {
        if index.insert(city.name.as_str(), location).is_some() {
            return Err(format!("duplicate city name '{}'", city.name).into());
        }
    }

    let roads = topology
        .roads
        .as_ref()
        .map(|roads| {
            roads
                .iter()
                .map(|road| {
                    let get_location = |name: &str| {
                        index.get(name).copied().ok_or_else(|| {
                            GenericError::from(format!("unknown city '{name}' used in road {}-{}", road.from, road.to))
                        })
                    };
                    let (from, to) = (get_location(road.from.as_str())?, get_location(road.to.as_str())?);
                    let distance = road.distance.unwrap_or_else(|| cities[from].euclidean_distance(&cities[to]));

                    Ok(CoreRoad { from, to, distance })
                })
                .collect::<GenericResult<Vec<_>>>()
        })
        .transpose()?;

    CoreTopology::new(cities, roads)
}

fn create_agents(agents: Option<&[Agent]>, vehicles: &[Arc<CoreVehicle>]) -> GenericResult<Vec<AgentModel>> {
    let Some(agents) = agents else {
        return Ok(vec![AgentModel { id: 0, vehicles: vehicles.to_vec() }]);
    };

    check_unique_ids(agents.iter().map(|agent| agent.id), "agent")?;

    let mut owned = FxHashSet::default();
    let mut models = agents
        .iter()
        .map(|agent| {
            let agent_vehicles = agent
                .vehicles
                .iter()
                .map(|&id| {
                    if !owned.insert(id) {
                        return Err(GenericError::from(format!("vehicle {id} is assigned to more than one agent")));
                    }

                    vehicles.iter().find(|vehicle| vehicle.id == id).cloned().ok_or_else(|| {
                        GenericError::from(format!("agent {} refers to unknown vehicle {id}", agent.id))
                    })
                })
                .collect::<GenericResult<Vec<_>>>()?;

            Ok(AgentModel { id: agent.id, vehicles: agent_vehicles })
        })
        .collect::<GenericResult<Vec<_>>>()?;

    models.sort_by_key(|agent| agent.id);

    Ok(models)
}

fn check_unique_ids(ids: impl Iterator<Item = usize>, entity: &str) -> GenericResult<()> {
    let mut seen = FxHashSet::default();

    ids.into_iter().try_for_each(|id| {
        if seen.insert(id) { Ok(()) } else { Err(format!("duplicate {entity} id: {id}").into()) }
    })
}
