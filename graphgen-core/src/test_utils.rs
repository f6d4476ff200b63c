//! Shared test utilities for `graphgen-core`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding the number of cases per property.
const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";

/// Builds a standard proptest configuration, honouring `PROPTEST_CASES` when
/// it holds a positive integer.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = match env::var(PROPTEST_CASES_ENV_KEY) {
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(parsed) if parsed > 0 => parsed,
            _ => {
                tracing::warn!(
                    env = PROPTEST_CASES_ENV_KEY,
                    raw = %raw,
                    "invalid property-test case override; using default",
                );
                default_cases
            }
        },
        Err(_) => default_cases,
    };
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
