//! A command line glue for the pickup and delivery auction planner.
//!
//! The crate contains:
//! - JSON formats of problems, solutions and auction reports, see [`format`]
//! - configuration, CSV import and a sequential sealed-bid auction host, see [`extensions`]
//!
//! # Examples
//!
//! ```
//! use pdp_cli::format::problem::JsonProblem;
//! use std::io::BufReader;
//!
//! let json = r#"{
//!   "topology": {"cities": [{"name": "A", "x": 0, "y": 0}, {"name": "B", "x": 3, "y": 4}]},
//!   "vehicles": [{"id": 0, "home": "A", "capacity": 10, "costPerKm": 2}],
//!   "tasks": [{"id": 0, "pickup": "A", "delivery": "B", "weight": 3, "reward": 100}]
//! }"#;
//!
//! let model = BufReader::new(json.as_bytes()).read_json().unwrap();
//!
//! assert_eq!(model.tasks.len(), 1);
//! assert_eq!(model.agents.len(), 1);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod extensions;
pub mod format;
