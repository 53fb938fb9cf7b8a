//! Unit tests for the union-find, the connection planner and its parser.

use rstest::rstest;

use crate::error::{InputError, RegionError};

use super::{DisjointSet, Road, parse_connection_problem, plan_connections};

fn solve(input: &str) -> (i64, usize) {
    let problem = parse_connection_problem(input.as_bytes()).expect("input must parse");
    let plan = problem.solve().expect("plan must succeed");
    (plan.total_cost(), plan.remaining_components())
}

#[rstest]
#[case::threshold_filters_expensive_road("3 2 10\n1 2 5\n2 3 15\n", (25, 2))]
#[case::no_roads("4 0 7\n", (28, 4))]
#[case::cycle_is_skipped("3 3 100\n1 2 1\n2 3 1\n1 3 1\n", (102, 1))]
#[case::road_at_threshold_is_dropped("2 1 5\n1 2 5\n", (10, 2))]
#[case::all_roads_filtered("3 2 1\n1 2 4\n2 3 9\n", (3, 3))]
#[case::cheaper_parallel_road_wins("2 2 50\n1 2 30\n2 1 20\n", (70, 1))]
#[case::self_loop_never_built("2 1 9\n1 1 1\n", (18, 2))]
#[case::empty_problem("0 0 5\n", (0, 0))]
#[case::tokens_may_share_lines("3 2 10 1 2 5 2 3 15", (25, 2))]
fn solves_reference_cases(#[case] input: &str, #[case] expected: (i64, usize)) {
    assert_eq!(solve(input), expected);
}

#[test]
fn plan_records_roads_in_acceptance_order() {
    let roads = [
        Road::new(1, 2, 7),
        Road::new(3, 4, 2),
        Road::new(2, 3, 3),
        Road::new(1, 4, 1),
    ];
    let plan = plan_connections(4, &roads, 100).expect("plan must succeed");
    assert_eq!(
        plan.roads(),
        &[Road::new(1, 4, 1), Road::new(3, 4, 2), Road::new(2, 3, 3)]
    );
    assert_eq!(plan.roads_cost(), 6);
    assert_eq!(plan.remaining_components(), 1);
    assert_eq!(plan.fallback_cost(), 100);
    assert_eq!(plan.total_cost(), 106);
}

#[test]
fn equal_costs_keep_input_order() {
    let roads = [Road::new(1, 2, 4), Road::new(2, 3, 4), Road::new(1, 3, 4)];
    let plan = plan_connections(3, &roads, 10).expect("plan must succeed");
    assert_eq!(plan.roads(), &[Road::new(1, 2, 4), Road::new(2, 3, 4)]);
}

#[test]
fn one_fallback_per_component_not_per_region() {
    // {1,2,3} joined by roads, {4} and {5} alone.
    let roads = [Road::new(1, 2, 1), Road::new(2, 3, 1)];
    let plan = plan_connections(5, &roads, 10).expect("plan must succeed");
    assert_eq!(plan.remaining_components(), 3);
    assert_eq!(plan.total_cost(), 2 + 3 * 10);
}

#[rstest]
#[case(Road::new(0, 1, 1), 0)]
#[case(Road::new(1, 4, 1), 4)]
fn rejects_regions_outside_range(#[case] road: Road, #[case] region: usize) {
    let err = plan_connections(3, &[road], 10).expect_err("region is invalid");
    assert_eq!(
        err,
        RegionError::InvalidRegion {
            road: 0,
            region,
            region_count: 3,
        }
    );
}

#[test]
fn reports_overflowing_totals() {
    let err = plan_connections(3, &[], i64::MAX).expect_err("3 * i64::MAX overflows");
    assert!(matches!(err, RegionError::CostOverflow { .. }));
}

#[rstest]
#[case::empty("", InputError::MissingToken { expected: "region count".to_owned() })]
#[case::negative_regions(
    "-1 0 3",
    InputError::NegativeCount { field: "region count", value: -1 }
)]
#[case::negative_roads(
    "2 -4 3",
    InputError::NegativeCount { field: "road count", value: -4 }
)]
#[case::non_numeric(
    "2 1 x",
    InputError::InvalidInteger { token: "x".to_owned(), expected: "fallback cost".to_owned() }
)]
#[case::truncated_road(
    "2 2 9\n1 2 3\n1 2",
    InputError::MissingToken { expected: "cost of road 2".to_owned() }
)]
#[case::negative_region_id(
    "2 1 9\n-1 2 3",
    InputError::InvalidInteger {
        token: "-1".to_owned(),
        expected: "first region of road 1".to_owned(),
    }
)]
fn parser_rejects_malformed_input(#[case] input: &str, #[case] expected: InputError) {
    let err = parse_connection_problem(input.as_bytes()).expect_err("input is malformed");
    assert_eq!(err, expected);
}

#[test]
fn parser_accepts_negative_costs() {
    let problem = parse_connection_problem("2 1 -3\n1 2 -8\n".as_bytes()).expect("valid input");
    assert_eq!(problem.fallback_cost, -3);
    assert_eq!(problem.roads, vec![Road::new(1, 2, -8)]);
    let plan = problem.solve().expect("plan must succeed");
    assert_eq!((plan.total_cost(), plan.remaining_components()), (-11, 1));
}

#[test]
fn find_compresses_the_whole_path() {
    let mut set = DisjointSet::new(4);
    // Rank ties leave 3 -> 2 -> 0 and 1 -> 0.
    assert!(set.union(0, 1));
    assert!(set.union(2, 3));
    assert!(set.union(0, 2));
    let root = set.find(3);
    assert_eq!(root, 0);
    for node in 0..4 {
        assert_eq!(set.parent_of(node), root, "node {node} must point at the root");
    }
}

#[test]
fn union_by_rank_attaches_shallow_tree_under_deep_one() {
    let mut set = DisjointSet::new(3);
    assert!(set.union(0, 1));
    assert_eq!(set.rank_of(0), 1);
    // Singleton 2 (rank 0) goes under root 0 even though it is the left argument.
    assert!(set.union(2, 0));
    assert_eq!(set.find(2), 0);
    assert_eq!(set.rank_of(0), 1);
}

#[test]
fn union_of_connected_nodes_is_a_no_op() {
    let mut set = DisjointSet::new(3);
    assert!(set.union(0, 1));
    let components = set.components();
    assert!(!set.union(1, 0));
    assert_eq!(set.components(), components);
    assert!(set.connected(0, 1));
    assert!(!set.connected(0, 2));
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
}

#[rstest]
#[case::no_roads("4611686018427387904 0 1\n", (1 << 62, 1 << 62))]
#[case::one_road("4611686018427387904 1 1\n1 2 0\n", ((1 << 62) - 1, (1 << 62) - 1))]
fn huge_region_counts_plan_without_allocating_per_region(
    #[case] input: &str,
    #[case] expected: (i64, usize),
) {
    assert_eq!(solve(input), expected);
}

#[test]
fn unrepresentable_fallback_total_is_an_error() {
    let err = plan_connections(usize::MAX, &[], 1).expect_err("usize::MAX components overflow i64");
    assert_eq!(
        err,
        RegionError::CostOverflow {
            stage: "charging fallback costs",
        }
    );
}

#[test]
fn untouched_regions_each_pay_the_fallback() {
    // Roads only touch regions 7 and 9; the other eight stay alone.
    let plan = plan_connections(10, &[Road::new(9, 7, 2)], 5).expect("plan must succeed");
    assert_eq!(plan.remaining_components(), 9);
    assert_eq!(plan.total_cost(), 2 + 9 * 5);
}
