//! Deterministic input data shared by the direct and reflective variants.

use crate::config::{SuiteConfig, FIXTURE_MAX};
use crate::error::ConfigError;
use log::debug;
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Seeded sequence of distinct integers in `[0, FIXTURE_MAX)`.
///
/// Built fresh before every benchmark so each one sees the same data no
/// matter which ran before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    ints: Vec<i64>,
    fill_len: usize,
    fill_value: i64,
}

impl Fixture {
    /// Validates `config` and builds the fixture it describes.
    pub fn new(config: &SuiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::generate(config))
    }

    /// Builds from a config that already passed [`SuiteConfig::validate`].
    pub(crate) fn generate(config: &SuiteConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let ints = index::sample(&mut rng, FIXTURE_MAX as usize, config.fixture_len)
            .into_iter()
            .map(|i| i as i64)
            .collect::<Vec<_>>();
        debug!(
            "built fixture: seed={} len={} fill={}",
            config.seed,
            ints.len(),
            config.fill_len
        );
        Self {
            ints,
            fill_len: config.fill_len,
            fill_value: config.fill_value,
        }
    }

    pub fn ints(&self) -> &[i64] {
        &self.ints
    }

    /// The keys used by the map benchmarks.
    pub fn keys(&self) -> &[i64] {
        &self.ints[..self.fill_len]
    }

    pub fn fill_len(&self) -> usize {
        self.fill_len
    }

    pub fn fill_value(&self) -> i64 {
        self.fill_value
    }

    /// Map of the first `len` fixture integers (or all of them, if fewer)
    /// to the fill value.
    pub fn build_map(&self, len: usize) -> HashMap<i64, i64> {
        let len = len.min(self.ints.len());
        let mut map = HashMap::with_capacity(len);
        for &key in &self.ints[..len] {
            map.insert(key, self.fill_value);
        }
        map
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::generate(&SuiteConfig::default())
    }
}
