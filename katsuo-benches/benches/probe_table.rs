//! Linear-probing table benchmarks.
//!
//! Measures a single insert, delete and lookup against tables prefilled to
//! increasing load, so the cost of longer probe sequences shows up directly.
//! Words come from a small alphabet so that four-byte prefixes, and therefore
//! home slots, repeat.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use std::num::NonZeroUsize;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use katsuo_benches::{
    error::BenchSetupError,
    params::ProbeBenchParams,
    source::{SyntheticWordConfig, SyntheticWords},
};
use katsuo_core::ProbeTable;

/// Seed used for all synthetic word generation in this benchmark.
const SEED: u64 = 42;

/// Number of slots in every benchmarked table.
const CAPACITY: usize = 4_096;

/// Resident key counts: 25%, 50%, 75% and 95% load.
const RESIDENT_KEYS: &[usize] = &[1_024, 2_048, 3_072, 3_891];

struct Prepared {
    table: ProbeTable,
    resident: String,
    absent: String,
}

fn prepare(words: &SyntheticWords, resident_keys: usize) -> Result<Prepared, BenchSetupError> {
    let capacity = NonZeroUsize::new(CAPACITY).ok_or(BenchSetupError::ZeroValue {
        context: "table capacity",
    })?;
    let mut table = ProbeTable::new(capacity);
    for word in words.words().iter().take(resident_keys) {
        table.insert(word.as_str())?;
    }
    let last = resident_keys.checked_sub(1).ok_or(BenchSetupError::ZeroValue {
        context: "resident keys",
    })?;
    let resident = words
        .words()
        .get(last)
        .ok_or(BenchSetupError::ZeroValue {
            context: "resident keys",
        })?
        .clone();
    let absent = words
        .absent_variant(last)
        .ok_or(BenchSetupError::ZeroValue {
            context: "free alphabet markers",
        })?;
    Ok(Prepared {
        table,
        resident,
        absent,
    })
}

fn probe_table_ops_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let words = SyntheticWords::generate(&SyntheticWordConfig {
        word_count: CAPACITY,
        min_length: 3,
        max_length: 8,
        alphabet: "etaoinshr".to_owned(),
        seed: SEED,
    })?;

    let mut group = c.benchmark_group("probe_table");
    for &resident_keys in RESIDENT_KEYS {
        let prepared = prepare(&words, resident_keys)?;
        let params = ProbeBenchParams {
            capacity: CAPACITY,
            resident_keys,
        };

        group.bench_with_input(
            BenchmarkId::new("insert", &params),
            &prepared,
            |b, prepared| {
                b.iter_batched(
                    || prepared.table.clone(),
                    |mut table| table.insert(prepared.absent.as_str()),
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("delete", &params),
            &prepared,
            |b, prepared| {
                b.iter_batched(
                    || prepared.table.clone(),
                    |mut table| table.delete(&prepared.resident),
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("find_hit", &params),
            &prepared,
            |b, prepared| b.iter(|| prepared.table.find(&prepared.resident)),
        );
        group.bench_with_input(
            BenchmarkId::new("find_miss", &params),
            &prepared,
            |b, prepared| b.iter(|| prepared.table.find(&prepared.absent)),
        );
    }

    group.finish();
    Ok(())
}

fn probe_table_ops(c: &mut Criterion) {
    if let Err(err) = probe_table_ops_impl(c) {
        panic!("probe_table benchmark setup failed: {err}");
    }
}

criterion_group!(benches, probe_table_ops);
criterion_main!(benches);
