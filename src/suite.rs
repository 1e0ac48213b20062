//! Registry of the named benchmarks and their timed loops.

use crate::config::SuiteConfig;
use crate::error::{ConfigError, OpError, SuiteError};
use crate::fixture::Fixture;
use crate::model::Foo;
use crate::ops::{chan, collections, funcs, values};
use crate::reflect::{MapValue, Value};
use log::debug;
use std::hint::black_box;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    InitVar,
    SliceFill,
    MapFill,
    MapKeys,
    CallFunc,
    MakeFunc,
    Chan,
    StructField,
    StructMethod,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::InitVar,
        Category::SliceFill,
        Category::MapFill,
        Category::MapKeys,
        Category::CallFunc,
        Category::MakeFunc,
        Category::Chan,
        Category::StructField,
        Category::StructMethod,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::InitVar => "init_var",
            Category::SliceFill => "slice_fill",
            Category::MapFill => "map_fill",
            Category::MapKeys => "map_keys",
            Category::CallFunc => "call_func",
            Category::MakeFunc => "make_func",
            Category::Chan => "chan",
            Category::StructField => "struct_field",
            Category::StructMethod => "struct_method",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Direct,
    Reflective,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Direct, Variant::Reflective];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Direct => "direct",
            Variant::Reflective => "reflect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    category: Category,
    variant: Variant,
}

impl Benchmark {
    pub fn new(category: Category, variant: Variant) -> Self {
        Self { category, variant }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn id(&self) -> String {
        format!("{}/{}", self.category.name(), self.variant.name())
    }

    /// Runs the operation `iters` times and returns the time spent in the
    /// loop. Inputs that are not part of the measured work are prepared
    /// before the clock starts.
    pub fn run(&self, fixture: &Fixture, iters: u64) -> Result<Duration, SuiteError> {
        self.run_loop(fixture, iters).map_err(|source| SuiteError {
            id: self.id(),
            source,
        })
    }

    fn run_loop(&self, fixture: &Fixture, iters: u64) -> Result<Duration, OpError> {
        let len = fixture.fill_len();
        let value = fixture.fill_value();
        match (self.category, self.variant) {
            (Category::InitVar, Variant::Direct) => timed(iters, || {
                black_box(values::init_var(black_box(value)));
                Ok(())
            }),
            (Category::InitVar, Variant::Reflective) => timed(iters, || {
                black_box(values::init_var_reflect(black_box(value)));
                Ok(())
            }),
            (Category::SliceFill, Variant::Direct) => timed(iters, || {
                black_box(collections::make_slice_and_fill(black_box(len), value));
                Ok(())
            }),
            (Category::SliceFill, Variant::Reflective) => timed(iters, || {
                black_box(collections::make_slice_and_fill_reflect(
                    black_box(len),
                    value,
                )?);
                Ok(())
            }),
            (Category::MapFill, Variant::Direct) => {
                let keys = fixture.keys();
                timed(iters, || {
                    black_box(collections::make_map_and_fill(black_box(keys), value));
                    Ok(())
                })
            }
            (Category::MapFill, Variant::Reflective) => {
                let keys = fixture.keys();
                timed(iters, || {
                    black_box(collections::make_map_and_fill_reflect(
                        black_box(keys),
                        value,
                    )?);
                    Ok(())
                })
            }
            (Category::MapKeys, Variant::Direct) => {
                let map = fixture.build_map(len);
                timed(iters, || {
                    black_box(collections::map_keys(black_box(&map)));
                    Ok(())
                })
            }
            (Category::MapKeys, Variant::Reflective) => {
                let map = MapValue::from_map(&fixture.build_map(len))?;
                timed(iters, || {
                    black_box(collections::map_keys_reflect(black_box(&map)));
                    Ok(())
                })
            }
            (Category::CallFunc, Variant::Direct) => timed(iters, || {
                black_box(funcs::call_func(black_box(value), black_box(value)));
                Ok(())
            }),
            (Category::CallFunc, Variant::Reflective) => timed(iters, || {
                black_box(funcs::call_func_reflect(
                    black_box(value),
                    black_box(value),
                )?);
                Ok(())
            }),
            (Category::MakeFunc, Variant::Direct) => {
                let base = funcs::multiply_slice;
                timed(iters, || {
                    black_box(funcs::make_func_and_call(
                        &base,
                        black_box(value),
                        black_box(value),
                    ));
                    Ok(())
                })
            }
            (Category::MakeFunc, Variant::Reflective) => {
                let ty = funcs::int_binary_type();
                let imp = funcs::multiply_impl_fn();
                timed(iters, || {
                    black_box(funcs::make_func_and_call_reflect(
                        &ty,
                        &imp,
                        black_box(value),
                        black_box(value),
                    )?);
                    Ok(())
                })
            }
            (Category::Chan, Variant::Direct) => timed(iters, || {
                black_box(chan::make_chan_and_put(black_box(value))?);
                Ok(())
            }),
            (Category::Chan, Variant::Reflective) => timed(iters, || {
                black_box(chan::make_chan_and_put_reflect(black_box(value))?);
                Ok(())
            }),
            (Category::StructField, Variant::Direct) => timed(iters, || {
                black_box(values::new_struct_and_set_field(black_box(value)));
                Ok(())
            }),
            (Category::StructField, Variant::Reflective) => timed(iters, || {
                black_box(values::new_struct_and_set_field_reflect(black_box(value))?);
                Ok(())
            }),
            (Category::StructMethod, Variant::Direct) => {
                let foo = Foo::new(value);
                timed(iters, || {
                    black_box(values::call_struct_method(black_box(&foo), value));
                    Ok(())
                })
            }
            (Category::StructMethod, Variant::Reflective) => {
                let foo: Value = values::new_struct_and_set_field_reflect(value)?;
                timed(iters, || {
                    black_box(values::call_struct_method_reflect(black_box(&foo), value)?);
                    Ok(())
                })
            }
        }
    }
}

fn timed<F>(iters: u64, mut body: F) -> Result<Duration, OpError>
where
    F: FnMut() -> Result<(), OpError>,
{
    let start = Instant::now();
    for _ in 0..iters {
        body()?;
    }
    Ok(start.elapsed())
}

/// The full set of paired benchmarks plus the setup hook that builds their
/// input.
#[derive(Debug, Clone)]
pub struct Suite {
    config: SuiteConfig,
    benchmarks: Vec<Benchmark>,
}

impl Suite {
    /// Rejects configs that fail [`SuiteConfig::validate`], so every later
    /// `setup` and `run` works on a consistent fixture.
    pub fn new(config: SuiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::registered(config))
    }

    fn registered(config: SuiteConfig) -> Self {
        let benchmarks = Category::ALL
            .into_iter()
            .flat_map(|category| {
                Variant::ALL
                    .into_iter()
                    .map(move |variant| Benchmark::new(category, variant))
            })
            .collect::<Vec<_>>();
        debug!("registered {} benchmarks", benchmarks.len());
        Self { config, benchmarks }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Builds a fresh fixture. Call once before each benchmark.
    pub fn setup(&self) -> Fixture {
        Fixture::generate(&self.config)
    }

    pub fn benchmarks(&self) -> &[Benchmark] {
        &self.benchmarks
    }

    pub fn find(&self, id: &str) -> Option<&Benchmark> {
        self.benchmarks.iter().find(|bench| bench.id() == id)
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::registered(SuiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_pair_in_order() {
        let suite = Suite::default();
        assert_eq!(suite.benchmarks().len(), 18);
        assert_eq!(suite.benchmarks()[0].id(), "init_var/direct");
        assert_eq!(suite.benchmarks()[1].id(), "init_var/reflect");
        assert_eq!(suite.benchmarks()[17].id(), "struct_method/reflect");
    }

    #[test]
    fn find_by_id() {
        let suite = Suite::default();
        let bench = suite.find("map_keys/reflect").unwrap();
        assert_eq!(bench.category(), Category::MapKeys);
        assert_eq!(bench.variant(), Variant::Reflective);
        assert!(suite.find("map_keys/other").is_none());
    }

    #[test]
    fn inconsistent_config_is_rejected_up_front() {
        let err = Suite::new(SuiteConfig {
            fill_len: 2000,
            ..SuiteConfig::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::FillExceedsFixture {
                fill: 2000,
                fixture: 1000
            }
        );
    }

    #[test]
    fn zero_iterations_do_no_work() {
        let suite = Suite::default();
        let fixture = suite.setup();
        for bench in suite.benchmarks() {
            bench.run(&fixture, 0).unwrap();
        }
    }
}
