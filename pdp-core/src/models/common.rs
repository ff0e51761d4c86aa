//! Common primitives shared by problem and solution models.

use crate::utils::Float;

/// Specifies location type: an index of a city in the topology.
pub type Location = usize;

/// Represents a distance.
pub type Distance = Float;

/// Represents a cost value.
pub type Cost = Float;

/// Represents a task weight or a vehicle capacity.
pub type Weight = u32;
