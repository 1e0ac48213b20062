//! One direct and one reflective implementation per benchmark category.
//!
//! Each function does a single unit of work and returns what it built, so
//! the two variants can be compared for equal results as well as timed.

pub mod chan;
pub mod collections;
pub mod funcs;
pub mod values;

use crate::error::ReflectError;
use crate::reflect::Value;

/// Extracts the integer from a single-result call.
pub(crate) fn single_int(results: &[Value]) -> Result<i64, ReflectError> {
    match results {
        [value] => value.int(),
        _ => Err(ReflectError::ResultCount {
            expected: 1,
            found: results.len(),
        }),
    }
}
