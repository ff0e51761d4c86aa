//! JSON formats used to exchange data with the planner.

pub mod problem;
pub mod report;
pub mod solution;
