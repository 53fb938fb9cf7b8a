//! Random road networks for connection planner benchmarking.

use crate::source::SyntheticError;
use katsuo_core::regions::{ConnectionProblem, Road};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Configuration for a random road network.
#[derive(Clone, Debug)]
pub struct SyntheticRoadConfig {
    /// Number of regions, numbered from 1.
    pub region_count: usize,
    /// Number of candidate roads.
    pub road_count: usize,
    /// Smallest road cost, inclusive.
    pub min_cost: i64,
    /// Largest road cost, inclusive.
    pub max_cost: i64,
    /// Fallback cost charged per unconnected component.
    pub fallback_cost: i64,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// A seeded connection problem with uniformly drawn endpoints and costs.
///
/// Endpoints are drawn independently, so self-loops and parallel roads
/// appear.
#[derive(Clone, Debug)]
pub struct SyntheticRoads {
    problem: ConnectionProblem,
}

impl SyntheticRoads {
    /// Generates a road network from the supplied configuration.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate(config: &SyntheticRoadConfig) -> Result<Self, SyntheticError> {
        if config.region_count == 0 && config.road_count > 0 {
            return Err(SyntheticError::ZeroRegions);
        }
        if config.min_cost > config.max_cost {
            return Err(SyntheticError::InvalidCostRange {
                min_cost: config.min_cost,
                max_cost: config.max_cost,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let roads = (0..config.road_count)
            .map(|_| {
                Road::new(
                    rng.gen_range(1..=config.region_count),
                    rng.gen_range(1..=config.region_count),
                    rng.gen_range(config.min_cost..=config.max_cost),
                )
            })
            .collect();
        Ok(Self {
            problem: ConnectionProblem {
                region_count: config.region_count,
                fallback_cost: config.fallback_cost,
                roads,
            },
        })
    }

    /// Returns the generated problem.
    #[must_use]
    pub const fn problem(&self) -> &ConnectionProblem {
        &self.problem
    }
}
