//! Throughput and probe-length benchmark for [`ProbeTable`].
//!
//! A run inserts a prefix of a word list in fixed-size batches, timing each
//! batch, and then deletes a sub-range of the same words while recording how
//! many probes each successful deletion needed.

use std::io::{self, BufRead};
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use crate::error::BenchmarkError;
use crate::probe::ProbeTable;

/// Table capacity used by the reference run.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(24_000) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};
/// Number of words inserted by the reference run.
pub const DEFAULT_WORD_COUNT: usize = 20_000;
/// Keys per timed batch in the reference run.
pub const DEFAULT_BATCH_SIZE: usize = 500;
/// Word indices deleted by the reference run.
pub const DEFAULT_DELETE_RANGE: RangeInclusive<usize> = 14_000..=14_998;

/// Configuration for [`run_probe_benchmark`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProbeBenchConfig {
    /// Number of slots in the table.
    pub capacity: NonZeroUsize,
    /// Number of leading words to insert.
    pub word_count: usize,
    /// Keys inserted per timed batch.
    pub batch_size: usize,
    /// Indices (into the word list) deleted after insertion.
    pub delete_range: RangeInclusive<usize>,
}

impl Default for ProbeBenchConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            word_count: DEFAULT_WORD_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
            delete_range: DEFAULT_DELETE_RANGE,
        }
    }
}

impl ProbeBenchConfig {
    fn validate(&self, available: usize) -> Result<(), BenchmarkError> {
        if self.batch_size == 0 {
            return Err(BenchmarkError::ZeroBatchSize);
        }
        if available < self.word_count {
            return Err(BenchmarkError::InsufficientWords {
                required: self.word_count,
                available,
            });
        }
        let (start, end) = (*self.delete_range.start(), *self.delete_range.end());
        if start > end || end >= self.word_count {
            return Err(BenchmarkError::InvalidDeleteRange {
                start,
                end,
                word_count: self.word_count,
            });
        }
        Ok(())
    }
}

/// Wall-clock time spent inserting one batch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BatchTiming {
    /// 1-based batch number.
    pub batch: usize,
    /// Keys attempted in the batch.
    pub keys: usize,
    /// Time spent on the whole batch.
    pub elapsed: Duration,
}

impl BatchTiming {
    /// Returns the mean time per key in the batch.
    #[must_use]
    pub fn per_key(&self) -> Duration {
        let keys = u32::try_from(self.keys).unwrap_or(u32::MAX).max(1);
        self.elapsed / keys
    }
}

/// Probe-length statistics over successful deletions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeStats {
    /// Fewest probes any deletion needed.
    pub min: usize,
    /// Most probes any deletion needed.
    pub max: usize,
    /// Mean probes per deletion.
    pub mean: f64,
    /// Number of deletions the statistics cover.
    pub deletions: usize,
}

#[derive(Default)]
struct ProbeAccumulator {
    min: Option<usize>,
    max: usize,
    sum: usize,
    deletions: usize,
}

impl ProbeAccumulator {
    fn record(&mut self, probes: usize) {
        self.min = Some(self.min.map_or(probes, |min| min.min(probes)));
        self.max = self.max.max(probes);
        self.sum += probes;
        self.deletions += 1;
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "probe sums stay far below f64's exact integer range"
    )]
    fn finish(self) -> Option<ProbeStats> {
        let min = self.min?;
        Some(ProbeStats {
            min,
            max: self.max,
            mean: self.sum as f64 / self.deletions as f64,
            deletions: self.deletions,
        })
    }
}

/// Outcome of a benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeBenchReport {
    /// Per-batch insertion timings, in batch order.
    pub batches: Vec<BatchTiming>,
    /// Keys the table refused because it was full.
    pub rejected_inserts: usize,
    /// Statistics over successful deletions; `None` when every deletion missed.
    pub probe_stats: Option<ProbeStats>,
    /// Deletions whose key was not found.
    pub missed_deletions: usize,
}

/// Reads whitespace-separated words from `reader`.
///
/// # Errors
/// Returns any I/O error raised by the reader, including invalid UTF-8.
pub fn read_word_list(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(str::to_owned));
    }
    Ok(words)
}

/// Inserts, times, and deletes `words` according to `config`.
///
/// # Errors
/// Returns [`BenchmarkError`] when the configuration is inconsistent with the
/// word list: a zero batch size, too few words, or a deletion range outside
/// the inserted prefix.
#[instrument(
    name = "benchmark.probe",
    err,
    skip(words, config),
    fields(
        capacity = config.capacity.get(),
        word_count = config.word_count,
        batch_size = config.batch_size,
    ),
)]
pub fn run_probe_benchmark(
    words: &[String],
    config: &ProbeBenchConfig,
) -> Result<ProbeBenchReport, BenchmarkError> {
    config.validate(words.len())?;

    let mut table = ProbeTable::new(config.capacity);
    let mut batches = Vec::new();
    let mut rejected_inserts = 0_usize;

    for (index, batch) in words[..config.word_count]
        .chunks(config.batch_size)
        .enumerate()
    {
        let start = Instant::now();
        for word in batch {
            if table.insert(word.as_str()).is_err() {
                rejected_inserts += 1;
            }
        }
        let timing = BatchTiming {
            batch: index + 1,
            keys: batch.len(),
            elapsed: start.elapsed(),
        };
        debug!(batch = timing.batch, elapsed_us = timing.elapsed.as_micros(), "batch inserted");
        batches.push(timing);
    }
    if rejected_inserts > 0 {
        warn!(rejected_inserts, "table filled before all words were inserted");
    }

    let mut accumulator = ProbeAccumulator::default();
    let mut missed_deletions = 0_usize;
    for word in &words[config.delete_range.clone()] {
        match table.delete(word) {
            Ok(probe) => accumulator.record(probe.probes()),
            Err(_) => missed_deletions += 1,
        }
    }

    let probe_stats = accumulator.finish();
    info!(
        batches = batches.len(),
        load_factor = table.load_factor(),
        missed_deletions,
        "probe benchmark completed"
    );
    Ok(ProbeBenchReport {
        batches,
        rejected_inserts,
        probe_stats,
        missed_deletions,
    })
}
