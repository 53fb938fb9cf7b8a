//! Error types for synthetic benchmark workloads.

/// Errors that may occur while generating benchmark workloads.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested word count was zero.
    #[error("word count must be greater than zero")]
    ZeroWords,
    /// The requested word alphabet was empty.
    #[error("word alphabet must not be empty")]
    EmptyAlphabet,
    /// The requested minimum word length was zero.
    #[error("minimum word length must be greater than zero")]
    ZeroWordLength,
    /// The requested word length range was inverted.
    #[error("invalid word length range: min={min_length}, max={max_length}")]
    InvalidWordLengthRange {
        /// Minimum configured length.
        min_length: usize,
        /// Maximum configured length.
        max_length: usize,
    },
    /// The requested region count was zero while roads were requested.
    #[error("roads need at least one region to connect")]
    ZeroRegions,
    /// The requested road cost range was inverted.
    #[error("invalid road cost range: min={min_cost}, max={max_cost}")]
    InvalidCostRange {
        /// Minimum configured cost.
        min_cost: i64,
        /// Maximum configured cost.
        max_cost: i64,
    },
}
