//! Property tests for the linear-probing table.
//!
//! Keys are drawn from a narrow alphabet so that home slots collide often and
//! probe sequences regularly cross tombstones and wrap around.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use proptest::prelude::*;

use crate::test_utils::suite_proptest_config;

use super::ProbeTable;

fn distinct_keys() -> impl Strategy<Value = (usize, Vec<String>)> {
    (1_usize..48).prop_flat_map(|capacity| {
        let keys = proptest::collection::btree_set("[a-d]{1,5}", 0..=capacity)
            .prop_map(|set: BTreeSet<String>| set.into_iter().collect::<Vec<_>>());
        (Just(capacity), keys)
    })
}

fn build(capacity: usize) -> ProbeTable {
    let Some(capacity) = NonZeroUsize::new(capacity) else {
        panic!("strategy never yields zero capacity");
    };
    ProbeTable::new(capacity)
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn inserted_keys_round_trip((capacity, keys) in distinct_keys()) {
        let mut table = build(capacity);
        for key in &keys {
            prop_assert!(table.insert(key.as_str()).is_ok());
        }
        prop_assert_eq!(table.len(), keys.len());

        for key in &keys {
            prop_assert!(table.contains(key), "{} must be reachable", key);
        }
        for key in &keys {
            prop_assert!(table.delete(key).is_ok());
            prop_assert!(table.delete(key).is_err(), "{} deleted twice", key);
        }
        prop_assert!(table.is_empty());
    }

    #[test]
    fn deleting_half_keeps_the_other_half_reachable((capacity, keys) in distinct_keys()) {
        let mut table = build(capacity);
        for key in &keys {
            prop_assert!(table.insert(key.as_str()).is_ok());
        }
        let (removed, kept): (Vec<_>, Vec<_>) =
            keys.iter().enumerate().partition(|(index, _)| index % 2 == 0);
        for (_, key) in &removed {
            prop_assert!(table.delete(key).is_ok());
        }
        for (_, key) in &kept {
            prop_assert!(table.contains(key), "{} lost behind a tombstone", key);
        }
        for (_, key) in &removed {
            prop_assert!(!table.contains(key));
        }
    }

    #[test]
    fn capacity_plus_one_insert_fails(capacity in 1_usize..32) {
        let mut table = build(capacity);
        for index in 0..capacity {
            let key = format!("k{index}");
            prop_assert!(table.insert(key).is_ok());
        }
        let before: Vec<String> = table.keys().map(str::to_owned).collect();
        prop_assert!(table.insert("overflow").is_err());
        let after: Vec<String> = table.keys().map(str::to_owned).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(table.len(), capacity);
    }
}
