//! Environment-driven tuning for property-test suites.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked execution of property cases.
pub const FORK_ENV_KEY: &str = "ERGRAPH_PBT_FORK";

/// Case count and fork mode shared by every property suite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PropertyProfile {
    cases: u32,
    fork: bool,
}

impl PropertyProfile {
    /// Reads overrides from the environment, falling back to `default_cases`
    /// and no forking.
    ///
    /// # Examples
    /// ```
    /// use ergraph_test_support::property::PropertyProfile;
    ///
    /// let profile = PropertyProfile::from_env(32);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn from_env(default_cases: u32) -> Self {
        Self::from_values(
            env::var(CASES_ENV_KEY).ok().as_deref(),
            env::var(FORK_ENV_KEY).ok().as_deref(),
            default_cases,
        )
    }

    /// Builds a profile from raw override values.
    ///
    /// Unparseable overrides are logged and ignored.
    #[must_use]
    pub fn from_values(cases: Option<&str>, fork: Option<&str>, default_cases: u32) -> Self {
        let cases = cases
            .and_then(|raw| parse_or_warn(CASES_ENV_KEY, raw, parse_cases))
            .unwrap_or(default_cases);
        let fork = fork
            .and_then(|raw| parse_or_warn(FORK_ENV_KEY, raw, parse_flag))
            .unwrap_or(false);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn parse_or_warn<T>(key: &'static str, raw: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        ::tracing::warn!(env = key, raw, "ignoring invalid property-test override");
    }
    parsed
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|cases| *cases > 0)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
