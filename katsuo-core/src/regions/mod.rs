//! Connecting regions with cheap roads under a per-component fallback cost.
//!
//! Every region must end up served, either by roads linking it to other
//! regions or by paying a fixed fallback cost. A group of regions joined by
//! roads pays the fallback once, not once per region, so the cheapest plan is a
//! minimum spanning forest over the roads that cost less than the fallback:
//!
//! - roads costing `fallback_cost` or more are dropped up front; building one
//!   never beats paying the fallback for one of its endpoints;
//! - the remaining roads are taken in ascending cost order (Kruskal), skipping
//!   any road whose endpoints are already connected;
//! - each component left at the end pays `fallback_cost` once.
//!
//! The plan's total is `roads_cost + remaining_components * fallback_cost`.

mod input;
mod union_find;

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use crate::error::RegionError;

pub use self::input::parse_connection_problem;
pub use self::union_find::DisjointSet;

/// A candidate road between two regions, identified by 1-based ids.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Road {
    left: usize,
    right: usize,
    cost: i64,
}

impl Road {
    /// Creates a road between regions `left` and `right` (1-based).
    #[must_use]
    pub const fn new(left: usize, right: usize, cost: i64) -> Self {
        Self { left, right, cost }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> usize { self.left }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> usize { self.right }

    /// Returns the construction cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> i64 { self.cost }
}

/// A complete connection problem: regions, candidate roads, fallback cost.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionProblem {
    /// Number of regions, numbered `1..=region_count`.
    pub region_count: usize,
    /// Cost paid once by every component left unconnected.
    pub fallback_cost: i64,
    /// Candidate roads in input order.
    pub roads: Vec<Road>,
}

impl ConnectionProblem {
    /// Plans the cheapest way to serve every region.
    ///
    /// # Errors
    /// See [`plan_connections`].
    pub fn solve(&self) -> Result<ConnectionPlan, RegionError> {
        plan_connections(self.region_count, &self.roads, self.fallback_cost)
    }
}

/// The cheapest way to serve every region.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionPlan {
    roads: Vec<Road>,
    roads_cost: i64,
    remaining_components: usize,
    fallback_cost: i64,
    total_cost: i64,
}

impl ConnectionPlan {
    /// Returns the roads that were built, in the order they were accepted.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Returns the summed cost of the built roads.
    #[must_use]
    #[rustfmt::skip]
    pub fn roads_cost(&self) -> i64 { self.roads_cost }

    /// Returns the number of components that pay the fallback cost.
    #[must_use]
    #[rustfmt::skip]
    pub fn remaining_components(&self) -> usize { self.remaining_components }

    /// Returns the fallback cost paid per remaining component.
    #[must_use]
    #[rustfmt::skip]
    pub fn fallback_cost(&self) -> i64 { self.fallback_cost }

    /// Returns `roads_cost + remaining_components * fallback_cost`.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> i64 { self.total_cost }
}

/// Plans roads for `region_count` regions given candidate `roads`.
///
/// Roads with `cost >= fallback_cost` are ignored. Cheaper roads are taken in
/// ascending cost order; ties keep their input order. Self-loops and roads
/// closing a cycle are skipped. An empty problem (`region_count == 0`) costs
/// nothing. Memory grows with the number of roads, not with `region_count`.
///
/// # Errors
/// Returns [`RegionError::InvalidRegion`] when a road endpoint is outside
/// `1..=region_count`, and [`RegionError::CostOverflow`] when the total does
/// not fit in an `i64`.
///
/// # Examples
/// ```
/// use katsuo_core::regions::{Road, plan_connections};
///
/// # fn main() -> Result<(), katsuo_core::RegionError> {
/// let roads = [Road::new(1, 2, 5), Road::new(2, 3, 15)];
/// let plan = plan_connections(3, &roads, 10)?;
/// assert_eq!(plan.total_cost(), 25);
/// assert_eq!(plan.remaining_components(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "regions.plan",
    err,
    skip(roads),
    fields(road_count = roads.len()),
)]
pub fn plan_connections(
    region_count: usize,
    roads: &[Road],
    fallback_cost: i64,
) -> Result<ConnectionPlan, RegionError> {
    validate_roads(region_count, roads)?;

    let mut candidates: Vec<&Road> = roads
        .iter()
        .filter(|road| road.cost < fallback_cost)
        .collect();
    candidates.sort_by_key(|road| road.cost);
    debug!(
        candidates = candidates.len(),
        discarded = roads.len() - candidates.len(),
        "filtered roads below fallback cost"
    );

    // Regions no candidate road touches stay singletons, so the union-find
    // only spans touched regions and its size is bounded by the road count.
    let mut dense: HashMap<usize, usize> = HashMap::new();
    let edges: Vec<(usize, usize, &Road)> = candidates
        .into_iter()
        .map(|road| {
            let left = dense_index(&mut dense, road.left);
            let right = dense_index(&mut dense, road.right);
            (left, right, road)
        })
        .collect();
    let untouched = region_count - dense.len();

    let mut regions = DisjointSet::new(dense.len());
    let mut built = Vec::new();
    let mut roads_cost = 0_i64;
    for (left, right, road) in edges {
        if untouched + regions.components() <= 1 {
            break;
        }
        if regions.union(left, right) {
            roads_cost = roads_cost
                .checked_add(road.cost)
                .ok_or(RegionError::CostOverflow {
                    stage: "summing road costs",
                })?;
            built.push(*road);
        }
    }
    record_roads(built.len());

    let remaining_components = untouched + regions.components();
    let total_cost = i64::try_from(remaining_components)
        .ok()
        .and_then(|components| components.checked_mul(fallback_cost))
        .and_then(|fallback_total| fallback_total.checked_add(roads_cost))
        .ok_or(RegionError::CostOverflow {
            stage: "charging fallback costs",
        })?;

    info!(
        roads_built = built.len(),
        roads_cost,
        remaining_components,
        total_cost,
        "connection plan ready"
    );
    Ok(ConnectionPlan {
        roads: built,
        roads_cost,
        remaining_components,
        fallback_cost,
        total_cost,
    })
}

fn dense_index(dense: &mut HashMap<usize, usize>, region: usize) -> usize {
    let next = dense.len();
    *dense.entry(region).or_insert(next)
}

fn validate_roads(region_count: usize, roads: &[Road]) -> Result<(), RegionError> {
    for (index, road) in roads.iter().enumerate() {
        for region in [road.left, road.right] {
            if region == 0 || region > region_count {
                return Err(RegionError::InvalidRegion {
                    road: index,
                    region,
                    region_count,
                });
            }
        }
    }
    Ok(())
}

#[cfg(feature = "metrics")]
fn record_roads(built: usize) {
    metrics::counter!("region_roads_accepted").increment(u64::try_from(built).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
const fn record_roads(_built: usize) {}

#[cfg(test)]
mod property;
#[cfg(test)]
mod tests;
