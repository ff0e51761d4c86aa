//! Core crate contains building blocks to plan pickup and delivery tasks for a fleet of
//! capacitated vehicles and to price extra tasks in a sealed-bid auction.
//!
//! # Overview
//!
//! A [`models::solution::Solution`] assigns every task to exactly one vehicle route where the
//! task's pickup precedes its delivery. An initial solution is created by
//! [`construction::create_initial_solution`] and then improved by the anytime stochastic local
//! search from the [`solver`] module. The [`auction`] module reuses the solver to compute the
//! marginal cost of a prospective task and keeps the plan committed so far.
//!
//! # Examples
//!
//! ```
//! use pdp_core::prelude::*;
//! use std::sync::Arc;
//!
//! let cities = vec![City::new("A", 0., 0.), City::new("B", 3., 4.)];
//! let topology = Arc::new(Topology::new(cities, None).unwrap());
//! let vehicles = vec![Arc::new(Vehicle { id: 0, home: 0, capacity: 10, cost_per_km: 1. })];
//! let tasks = vec![Arc::new(Task { id: 0, pickup: 0, delivery: 1, weight: 3, reward: 10 })];
//! let problem = Arc::new(Problem::new(vehicles, tasks, topology));
//!
//! let solver = Solver::new(SearchConfig::default(), Arc::new(Environment::new_silent(42)));
//! let result = solver.solve(problem, 100).unwrap();
//!
//! assert_eq!(result.solution.total_cost(), 5.);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod auction;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
