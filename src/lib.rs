//! Microbenchmarks pairing statically typed operations with their
//! reflective equivalents.
//!
//! Every benchmark category has a direct implementation and one that goes
//! through [`reflect`], a small runtime type-introspection layer built on
//! `std::any::Any`. The [`suite`] module registers both variants of each
//! category under a stable id and times them over a caller-chosen number of
//! iterations; `benches/reflection.rs` feeds them to criterion.

pub mod config;
pub mod error;
pub mod fixture;
pub mod model;
pub mod ops;
pub mod reflect;
pub mod suite;

pub use config::SuiteConfig;
pub use error::{ConfigError, OpError, ReflectError, SuiteError};
pub use fixture::Fixture;
pub use suite::{Benchmark, Category, Suite, Variant};
