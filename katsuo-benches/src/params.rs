//! Benchmark parameter types.
//!
//! Each struct doubles as the Criterion parameter label through its
//! `Display` implementation.

use std::fmt;

/// Parameters for a probe table benchmark run.
#[derive(Clone, Debug)]
pub struct ProbeBenchParams {
    /// Number of slots in the table.
    pub capacity: usize,
    /// Number of keys resident before the measured operation.
    pub resident_keys: usize,
}

impl fmt::Display for ProbeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cap={},keys={}", self.capacity, self.resident_keys)
    }
}

/// Parameters for a connection planner benchmark run.
#[derive(Clone, Debug)]
pub struct RegionBenchParams {
    /// Number of regions.
    pub region_count: usize,
    /// Number of candidate roads.
    pub road_count: usize,
}

impl fmt::Display for RegionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.region_count, self.road_count)
    }
}
