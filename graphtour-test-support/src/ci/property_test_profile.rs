//! Proptest sizing shared by every property suite in the workspace.
//!
//! CI jobs scale suites up or down through environment variables instead of
//! editing each `proptest!` block.

use std::env;

/// Overrides the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Runs each case in a forked subprocess when truthy.
pub const GRAPHTOUR_PBT_FORK_ENV_KEY: &str = "GRAPHTOUR_PBT_FORK";

/// Case count and fork mode resolved from the environment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Resolves the profile, falling back to the given defaults when a
    /// variable is unset or unparsable.
    ///
    /// # Examples
    /// ```
    /// use graphtour_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: lookup(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: lookup(GRAPHTOUR_PBT_FORK_ENV_KEY, parse_flag).unwrap_or(default_fork),
        }
    }

    /// Cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn lookup<T>(key: &'static str, parse: fn(&str) -> Result<T, &'static str>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(raw.trim())
        .inspect_err(|reason| {
            tracing::warn!(env = key, raw = %raw, reason, "ignoring invalid proptest override");
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.parse::<u32>() {
        Ok(0) => Err("case count must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be an unsigned integer"),
    }
}

fn parse_flag(raw: &str) -> Result<bool, &'static str> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected a boolean such as true/false, 1/0, yes/no or on/off"),
    }
}
