use reflect_bench::{Category, ConfigError, Suite, SuiteConfig, Variant};
use std::collections::HashSet;

#[test]
fn every_category_has_both_variants() {
    let suite = Suite::default();
    for category in Category::ALL {
        let variants: HashSet<Variant> = suite
            .benchmarks()
            .iter()
            .filter(|bench| bench.category() == category)
            .map(|bench| bench.variant())
            .collect();
        assert_eq!(variants.len(), 2, "{}", category.name());
    }
}

#[test]
fn ids_are_unique() {
    let suite = Suite::default();
    let ids: HashSet<String> = suite.benchmarks().iter().map(|b| b.id()).collect();
    assert_eq!(ids.len(), suite.benchmarks().len());
}

#[test]
fn every_benchmark_runs_a_few_iterations() {
    let suite = Suite::default();
    for bench in suite.benchmarks() {
        let fixture = suite.setup();
        if let Err(err) = bench.run(&fixture, 16) {
            panic!("{err}");
        }
    }
}

#[test]
fn setup_is_identical_between_benchmarks() {
    let suite = Suite::new(SuiteConfig {
        seed: 1234,
        ..SuiteConfig::default()
    })
    .unwrap();
    assert_eq!(suite.setup(), suite.setup());
    assert_eq!(suite.config().seed, 1234);
}

#[test]
fn oversized_fill_fails_before_any_benchmark_runs() {
    let config = SuiteConfig {
        fill_len: 2000,
        ..SuiteConfig::default()
    };
    assert!(matches!(
        Suite::new(config),
        Err(ConfigError::FillExceedsFixture { fill: 2000, .. })
    ));

    let config = SuiteConfig {
        fixture_len: usize::MAX,
        ..SuiteConfig::default()
    };
    assert!(matches!(
        Suite::new(config),
        Err(ConfigError::InvalidVar { .. })
    ));
}
