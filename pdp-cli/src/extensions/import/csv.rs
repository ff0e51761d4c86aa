//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_problem;

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;
    extern crate serde;

    use crate::format::problem::*;
    use pdp_core::utils::{GenericError, GenericResult};
    use serde::Deserialize;
    use std::io::{BufReader, Read};

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvCity {
        name: String,
        x: f64,
        y: f64,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvRoad {
        from: String,
        to: String,
        distance: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvVehicle {
        id: usize,
        home: String,
        capacity: u32,
        cost_per_km: f64,
        agent: Option<usize>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvTask {
        id: usize,
        pickup: String,
        delivery: String,
        weight: u32,
        reward: i64,
    }

    fn read_csv_entries<T, R: Read>(reader: BufReader<R>, entity: &str) -> GenericResult<Vec<T>>
    where
        for<'de> T: Deserialize<'de>,
    {
        let mut reader = csv::Reader::from_reader(reader);
        let mut entries = vec![];

        for entry in reader.deserialize() {
            entries.push(entry.map_err(|err| GenericError::from(format!("cannot read {entity}: {err}")))?);
        }

        Ok(entries)
    }

    fn read_cities<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<City>> {
        Ok(read_csv_entries::<CsvCity, _>(reader, "cities")?
            .into_iter()
            .map(|city| City { name: city.name, x: city.x, y: city.y })
            .collect())
    }

    fn read_roads<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Road>> {
        Ok(read_csv_entries::<CsvRoad, _>(reader, "roads")?
            .into_iter()
            .map(|road| Road { from: road.from, to: road.to, distance: road.distance })
            .collect())
    }

    fn read_vehicles<R: Read>(reader: BufReader<R>) -> GenericResult<(Vec<Vehicle>, Option<Vec<Agent>>)> {
        let entries = read_csv_entries::<CsvVehicle, _>(reader, "vehicles")?;

        // agents are defined only when every vehicle has an owner
        let agents = if !entries.is_empty() && entries.iter().all(|vehicle| vehicle.agent.is_some()) {
            let agents = entries.iter().fold(Vec::<Agent>::new(), |mut agents, vehicle| {
                let agent_id = vehicle.agent.unwrap_or_default();
                match agents.iter_mut().find(|agent| agent.id == agent_id) {
                    Some(agent) => agent.vehicles.push(vehicle.id),
                    None => agents.push(Agent { id: agent_id, vehicles: vec![vehicle.id] }),
                }
                agents
            });
            Some(agents)
        } else {
            None
        };

        let vehicles = entries
            .into_iter()
            .map(|vehicle| Vehicle {
                id: vehicle.id,
                home: vehicle.home,
                capacity: vehicle.capacity,
                cost_per_km: vehicle.cost_per_km,
            })
            .collect();

        Ok((vehicles, agents))
    }

    fn read_tasks<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Task>> {
        Ok(read_csv_entries::<CsvTask, _>(reader, "tasks")?
            .into_iter()
            .map(|task| Task {
                id: task.id,
                pickup: task.pickup,
                delivery: task.delivery,
                weight: task.weight,
                reward: task.reward,
            })
            .collect())
    }

    /// Reads problem from csv format.
    pub fn read_csv_problem<R: Read>(
        cities_reader: BufReader<R>,
        vehicles_reader: BufReader<R>,
        tasks_reader: BufReader<R>,
        roads_reader: Option<BufReader<R>>,
    ) -> GenericResult<Problem> {
        let cities = read_cities(cities_reader)?;
        let (vehicles, agents) = read_vehicles(vehicles_reader)?;
        let tasks = read_tasks(tasks_reader)?;
        let roads = roads_reader.map(read_roads).transpose()?;

        Ok(Problem { topology: Topology { cities, roads }, vehicles, tasks, agents })
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use crate::format::problem::Problem;
    use pdp_core::utils::GenericResult;
    use std::io::{BufReader, Read};

    /// A stub method for reading problem from csv format.
    pub fn read_csv_problem<R: Read>(
        _cities_reader: BufReader<R>,
        _vehicles_reader: BufReader<R>,
        _tasks_reader: BufReader<R>,
        _roads_reader: Option<BufReader<R>>,
    ) -> GenericResult<Problem> {
        Err("csv-format feature is not included".into())
    }
}
