//! Error types for the katsuo core library.
//!
//! Every fallible operation reports a dedicated error enum. Each enum carries a
//! companion code enum with a stable, machine-readable representation so the
//! CLI can log failures without matching on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::ProbeTable`] mutations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ProbeTableError {
    /// Every slot already holds a key.
    #[error("probe table is full ({capacity} slots occupied)")]
    Full {
        /// Fixed number of slots in the table.
        capacity: usize,
    },
    /// The probe sequence ended without meeting the key.
    #[error("key `{key}` is not present after {probes} probes")]
    NotFound {
        /// Key that was searched for.
        key: String,
        /// Number of forward steps taken before giving up.
        probes: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ProbeTableError`] variants.
    enum ProbeTableErrorCode for ProbeTableError {
        /// Every slot already holds a key.
        Full => Full { .. } => "PROBE_TABLE_FULL",
        /// The probe sequence ended without meeting the key.
        NotFound => NotFound { .. } => "PROBE_TABLE_NOT_FOUND",
    }
}

/// An error produced while ranking word frequencies.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FrequencyError {
    /// A requested rank exceeds the number of distinct words.
    #[error("rank {required} requested but the corpus only has {available} distinct words")]
    InsufficientVocabulary {
        /// Largest 1-based rank that was requested.
        required: usize,
        /// Number of distinct words available.
        available: usize,
    },
    /// Ranks are 1-based; zero never names a word.
    #[error("ranks are 1-based; rank 0 is invalid")]
    ZeroRank,
}

define_error_codes! {
    /// Stable codes describing [`FrequencyError`] variants.
    enum FrequencyErrorCode for FrequencyError {
        /// A requested rank exceeds the number of distinct words.
        InsufficientVocabulary => InsufficientVocabulary { .. } => "FREQUENCY_INSUFFICIENT_VOCABULARY",
        /// Ranks are 1-based; zero never names a word.
        ZeroRank => ZeroRank => "FREQUENCY_ZERO_RANK",
    }
}

/// An error produced while validating a probe benchmark run.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BenchmarkError {
    /// Batches must contain at least one key.
    #[error("batch_size must be at least 1")]
    ZeroBatchSize,
    /// The word list is shorter than the configured insert count.
    #[error("benchmark needs {required} words but only {available} were supplied")]
    InsufficientWords {
        /// Number of words the configuration inserts.
        required: usize,
        /// Number of words supplied by the caller.
        available: usize,
    },
    /// The deletion range does not lie inside the inserted words.
    #[error("delete range {start}..={end} is outside the {word_count} inserted words")]
    InvalidDeleteRange {
        /// First index of the deletion range.
        start: usize,
        /// Last index (inclusive) of the deletion range.
        end: usize,
        /// Number of words inserted before deleting.
        word_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`BenchmarkError`] variants.
    enum BenchmarkErrorCode for BenchmarkError {
        /// Batches must contain at least one key.
        ZeroBatchSize => ZeroBatchSize => "BENCHMARK_ZERO_BATCH_SIZE",
        /// The word list is shorter than the configured insert count.
        InsufficientWords => InsufficientWords { .. } => "BENCHMARK_INSUFFICIENT_WORDS",
        /// The deletion range does not lie inside the inserted words.
        InvalidDeleteRange => InvalidDeleteRange { .. } => "BENCHMARK_INVALID_DELETE_RANGE",
    }
}

/// An error produced while planning region connections.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RegionError {
    /// A road referenced a region outside `1..=region_count`.
    #[error("road {road} references region {region}, but regions are numbered 1..={region_count}")]
    InvalidRegion {
        /// Zero-based position of the road in the input.
        road: usize,
        /// Region id as supplied.
        region: usize,
        /// Number of regions in the problem.
        region_count: usize,
    },
    /// The total cost does not fit in an `i64`.
    #[error("connection cost overflowed while {stage}")]
    CostOverflow {
        /// Accumulation step that overflowed.
        stage: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`RegionError`] variants.
    enum RegionErrorCode for RegionError {
        /// A road referenced a region outside `1..=region_count`.
        InvalidRegion => InvalidRegion { .. } => "REGION_INVALID_REGION",
        /// The total cost does not fit in an `i64`.
        CostOverflow => CostOverflow { .. } => "REGION_COST_OVERFLOW",
    }
}

/// An error produced while parsing a connection problem.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InputError {
    /// The input ended before the named value was read.
    #[error("input ended while reading {expected}")]
    MissingToken {
        /// Description of the value that was expected.
        expected: String,
    },
    /// A token could not be parsed as an integer.
    #[error("expected an integer for {expected}, found `{token}`")]
    InvalidInteger {
        /// Raw token found in the input.
        token: String,
        /// Description of the value that was expected.
        expected: String,
    },
    /// A count in the header was negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeCount {
        /// Header field that was negative.
        field: &'static str,
        /// Value supplied in the input.
        value: i64,
    },
    /// Reading the underlying stream failed.
    #[error("failed to read input: {message}")]
    Read {
        /// Rendered I/O error.
        message: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`InputError`] variants.
    enum InputErrorCode for InputError {
        /// The input ended before the named value was read.
        MissingToken => MissingToken { .. } => "INPUT_MISSING_TOKEN",
        /// A token could not be parsed as an integer.
        InvalidInteger => InvalidInteger { .. } => "INPUT_INVALID_INTEGER",
        /// A count in the header was negative.
        NegativeCount => NegativeCount { .. } => "INPUT_NEGATIVE_COUNT",
        /// Reading the underlying stream failed.
        Read => Read { .. } => "INPUT_READ",
    }
}
