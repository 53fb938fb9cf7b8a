//! Shared test utilities for `katsuo-core`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

const CASES_ENV: &str = "KATSUO_PBT_CASES";

/// Builds the proptest configuration shared by every property suite.
///
/// `KATSUO_PBT_CASES` overrides `default_cases` when it holds a positive
/// integer; anything else is ignored.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = env::var(CASES_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|cases| *cases > 0)
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
