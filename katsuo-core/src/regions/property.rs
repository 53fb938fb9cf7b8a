//! Property tests for the union-find and the connection planner.
//!
//! The union-find is checked against a naive relabelling oracle, and the
//! planner against an exhaustive search over road subsets on small graphs.

use proptest::prelude::*;

use crate::test_utils::suite_proptest_config;

use super::{DisjointSet, Road, plan_connections};

/// Naive connectivity oracle: every element carries a component label and a
/// merge relabels one whole component.
struct LabelOracle {
    labels: Vec<usize>,
}

impl LabelOracle {
    fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
        }
    }

    fn union(&mut self, left: usize, right: usize) -> bool {
        let (from, to) = (self.labels[right], self.labels[left]);
        if from == to {
            return false;
        }
        for label in &mut self.labels {
            if *label == from {
                *label = to;
            }
        }
        true
    }

    fn connected(&self, left: usize, right: usize) -> bool {
        self.labels[left] == self.labels[right]
    }
}

fn union_script() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1_usize..24).prop_flat_map(|len| {
        let pairs = proptest::collection::vec((0..len, 0..len), 0..48);
        (Just(len), pairs)
    })
}

fn small_problem() -> impl Strategy<Value = (usize, Vec<Road>, i64)> {
    (1_usize..6).prop_flat_map(|regions| {
        let road = (1..=regions, 1..=regions, 0_i64..20)
            .prop_map(|(left, right, cost)| Road::new(left, right, cost));
        (
            Just(regions),
            proptest::collection::vec(road, 0..9),
            1_i64..25,
        )
    })
}

/// Cheapest `roads + components * fallback` over every subset of roads.
fn brute_force_total(regions: usize, roads: &[Road], fallback: i64) -> i64 {
    let mut best = i64::MAX;
    for mask in 0_u32..(1 << roads.len()) {
        let mut set = DisjointSet::new(regions);
        let mut cost = 0_i64;
        for (index, road) in roads.iter().enumerate() {
            if mask & (1 << index) != 0 {
                set.union(road.left() - 1, road.right() - 1);
                cost += road.cost();
            }
        }
        let components = i64::try_from(set.components()).unwrap_or(i64::MAX);
        best = best.min(cost + components * fallback);
    }
    best
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn union_find_matches_label_oracle((len, script) in union_script()) {
        let mut set = DisjointSet::new(len);
        let mut oracle = LabelOracle::new(len);
        for (left, right) in script {
            prop_assert_eq!(set.union(left, right), oracle.union(left, right));
        }
        for left in 0..len {
            let root = set.find(left);
            prop_assert_eq!(set.find(left), root, "find must be idempotent");
            for right in 0..len {
                prop_assert_eq!(set.connected(left, right), oracle.connected(left, right));
            }
        }
        let mut roots: Vec<usize> = (0..len).map(|node| set.find(node)).collect();
        roots.sort_unstable();
        roots.dedup();
        prop_assert_eq!(roots.len(), set.components());
    }

    #[test]
    fn planner_matches_exhaustive_search((regions, roads, fallback) in small_problem()) {
        let plan = plan_connections(regions, &roads, fallback).expect("ids are in range");
        prop_assert_eq!(plan.total_cost(), brute_force_total(regions, &roads, fallback));
        prop_assert!(plan.roads().iter().all(|road| road.cost() < fallback));
        prop_assert_eq!(plan.roads().len() + plan.remaining_components(), regions);
    }
}
