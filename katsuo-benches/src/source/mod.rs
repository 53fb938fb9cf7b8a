//! Seeded synthetic workloads.
//!
//! Word lists feed the probe table benchmarks and random road networks feed
//! the connection planner benchmarks. The same seed always yields the same
//! workload.

mod errors;
mod roads;
mod words;

pub use errors::SyntheticError;
pub use roads::{SyntheticRoadConfig, SyntheticRoads};
pub use words::{SyntheticWordConfig, SyntheticWords};
