//! Benchmark setup error type.
//!
//! Setup helpers propagate failures with `?` and the bench entry points turn
//! them into a single panic message.

use crate::source::SyntheticError;
use katsuo_core::{ProbeTableError, RegionError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic workload generation failed.
    #[error("synthetic workload generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Filling a table before measurement failed.
    #[error("probe table preparation failed: {0}")]
    ProbeTable(#[from] ProbeTableError),
    /// The generated connection problem was rejected.
    #[error("connection planning failed: {0}")]
    Region(#[from] RegionError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
