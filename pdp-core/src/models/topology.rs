//! A road network of cities with precomputed shortest paths.

#[cfg(test)]
#[path = "../../tests/unit/models/topology_test.rs"]
mod topology_test;

use crate::models::common::{Distance, Location};
use crate::models::problem::TransportCost;
use crate::utils::{Float, GenericResult};

/// A city: a named location with coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    /// A unique city name.
    pub name: String,
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
}

impl City {
    /// Creates a new instance of `City`.
    pub fn new(name: &str, x: Float, y: Float) -> Self {
        Self { name: name.to_string(), x, y }
    }

    /// Returns euclidean distance to other city.
    pub fn euclidean_distance(&self, other: &City) -> Distance {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt()
    }
}

/// A bidirectional road between two cities.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    /// One end of the road.
    pub from: Location,
    /// Other end of the road.
    pub to: Location,
    /// Road length.
    pub distance: Distance,
}

/// Keeps cities with all pairs shortest distances and next hops to restore paths.
pub struct Topology {
    cities: Vec<City>,
    distances: Vec<Distance>,
    next: Vec<Option<Location>>,
}

impl Topology {
    /// Creates a new topology. When `roads` is `None`, every pair of cities is connected
    /// directly with their euclidean distance.
    pub fn new(cities: Vec<City>, roads: Option<Vec<Road>>) -> GenericResult<Self> {
        let size = cities.len();

        let roads = match roads {
            Some(roads) => roads,
            None => (0..size)
                .flat_map(|from| ((from + 1)..size).map(move |to| (from, to)))
                .map(|(from, to)| Road { from, to, distance: cities[from].euclidean_distance(&cities[to]) })
                .collect(),
        };

        let mut distances = vec![Distance::INFINITY; size * size];
        let mut next = vec![None; size * size];

        (0..size).for_each(|idx| {
            distances[idx * size + idx] = 0.;
            next[idx * size + idx] = Some(idx);
        });

        for road in roads.iter() {
            if road.from >= size || road.to >= size {
                return Err(format!("road {}-{} refers to unknown city", road.from, road.to).into());
            }

            if !road.distance.is_finite() || road.distance < 0. {
                return Err(format!(
                    "road between '{}' and '{}' has invalid distance: {}",
                    cities[road.from].name, cities[road.to].name, road.distance
                )
                .into());
            }

            [(road.from, road.to), (road.to, road.from)].into_iter().for_each(|(from, to)| {
                if road.distance < distances[from * size + to] {
                    distances[from * size + to] = road.distance;
                    next[from * size + to] = Some(to);
                }
            });
        }

        for k in 0..size {
            for i in 0..size {
                let via = distances[i * size + k];
                if !via.is_finite() {
                    continue;
                }

                for j in 0..size {
                    let candidate = via + distances[k * size + j];
                    if candidate < distances[i * size + j] {
                        distances[i * size + j] = candidate;
                        next[i * size + j] = next[i * size + k];
                    }
                }
            }
        }

        if let Some(idx) = distances.iter().position(|distance| !distance.is_finite()) {
            return Err(format!(
                "city '{}' is not reachable from '{}'",
                cities[idx % size].name,
                cities[idx / size].name
            )
            .into());
        }

        Ok(Self { cities, distances, next })
    }

    /// Returns all cities.
    pub fn cities(&self) -> &[City] {
        self.cities.as_slice()
    }

    /// Returns city by its location.
    pub fn city(&self, location: Location) -> Option<&City> {
        self.cities.get(location)
    }

    /// Returns location of the city with the given name.
    pub fn location(&self, name: &str) -> Option<Location> {
        self.cities.iter().position(|city| city.name == name)
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.cities.len()
    }
}

impl TransportCost for Topology {
    fn distance(&self, from: Location, to: Location) -> Distance {
        self.distances[from * self.cities.len() + to]
    }

    fn path(&self, from: Location, to: Location) -> Vec<Location> {
        let size = self.cities.len();
        let mut path = vec![];
        let mut current = from;

        while current != to && path.len() < size {
            match self.next[current * size + to] {
                Some(hop) => {
                    path.push(hop);
                    current = hop;
                }
                None => break,
            }
        }

        path
    }
}
