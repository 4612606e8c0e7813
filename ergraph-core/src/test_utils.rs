//! Shared test utilities for `ergraph-core`.

use ergraph_test_support::property::PropertyProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration honouring the shared environment profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = PropertyProfile::from_env(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
