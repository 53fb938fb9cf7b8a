//! Katsuo core library.
//!
//! Two independent building blocks and the workflows that exercise them:
//!
//! - [`probe`]: a fixed-capacity open-addressing hash table with linear
//!   probing and tombstone deletion, driven by the word-[`frequency`] secret
//!   extractor and the insert/delete [`benchmark`].
//! - [`regions`]: a union-find with path compression and union by rank,
//!   driving a Kruskal-style planner that connects regions with roads cheaper
//!   than a per-component fallback cost.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the library emits:
//!
//! - `probe_table_inserts` (counter)
//! - `probe_table_deletes` (counter)
//! - `probe_table_probe_length` (histogram, labelled `op = insert | delete`)
//! - `region_roads_accepted` (counter)

pub mod benchmark;
mod error;
pub mod frequency;
pub mod probe;
pub mod regions;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{
        BenchmarkError, BenchmarkErrorCode, FrequencyError, FrequencyErrorCode, InputError,
        InputErrorCode, ProbeTableError, ProbeTableErrorCode, RegionError, RegionErrorCode,
    },
    probe::ProbeTable,
};
