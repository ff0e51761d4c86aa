//! A collection of models to represent problem and solution in pickup and delivery planning.

pub mod common;
pub mod plan;
pub mod problem;
pub mod solution;
pub mod topology;
