//! Benchmark support crate for katsuo.
//!
//! Provides seeded synthetic workloads and parameter types used by the
//! Criterion benchmarks for the linear-probing table and the connection
//! planner.

pub mod error;
pub mod params;
pub mod source;
