//! Suite parameters.
//!
//! Defaults reproduce the classic setup: seed 42, a 1000-integer fixture and
//! 100-element fills of the value 42. Any of the first three can be
//! overridden through the environment when running the benches.

use crate::error::ConfigError;
use log::warn;
use std::env;
use std::str::FromStr;

pub const SEED_VAR: &str = "REFLECT_BENCH_SEED";
pub const FIXTURE_LEN_VAR: &str = "REFLECT_BENCH_FIXTURE_LEN";
pub const FILL_LEN_VAR: &str = "REFLECT_BENCH_FILL_LEN";

/// Upper bound (exclusive) of fixture integers.
pub const FIXTURE_MAX: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteConfig {
    pub seed: u64,
    pub fixture_len: usize,
    pub fill_len: usize,
    pub fill_value: i64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            fixture_len: 1000,
            fill_len: 100,
            fill_value: 42,
        }
    }
}

impl SuiteConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Like [`SuiteConfig::from_env`], but falls back to the defaults (with a
    /// warning) when an override is rejected.
    pub fn from_env_or_default() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring benchmark overrides: {err}");
                Self::default()
            }
        }
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(seed) = parse_var(&lookup, SEED_VAR)? {
            config.seed = seed;
        }
        if let Some(len) = parse_var(&lookup, FIXTURE_LEN_VAR)? {
            config.fixture_len = len;
        }
        if let Some(len) = parse_var(&lookup, FILL_LEN_VAR)? {
            config.fill_len = len;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fixture_len > FIXTURE_MAX as usize {
            return Err(ConfigError::InvalidVar {
                var: FIXTURE_LEN_VAR,
                value: self.fixture_len.to_string(),
                reason: format!("at most {FIXTURE_MAX} distinct integers are available"),
            });
        }
        if self.fill_len > self.fixture_len {
            return Err(ConfigError::FillExceedsFixture {
                fill: self.fill_len,
                fixture: self.fixture_len,
            });
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|err: T::Err| ConfigError::InvalidVar {
            var,
            value: raw.clone(),
            reason: err.to_string(),
        })
}
