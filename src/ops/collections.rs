//! Sequences and maps.

use crate::error::ReflectError;
use crate::reflect::{make_map, make_slice, MapValue, SliceValue, Type, Value};
use std::collections::HashMap;

/// Grows an empty vector to `len` copies of `value`.
pub fn make_slice_and_fill(len: usize, value: i64) -> Vec<i64> {
    let mut slice = Vec::new();
    for _ in 0..len {
        slice.push(value);
    }
    slice
}

pub fn make_slice_and_fill_reflect(len: usize, value: i64) -> Result<SliceValue, ReflectError> {
    let mut slice = make_slice(Type::of::<i64>(), 0, 0);
    for _ in 0..len {
        slice.append(Value::of(value))?;
    }
    Ok(slice)
}

pub fn make_map_and_fill(keys: &[i64], value: i64) -> HashMap<i64, i64> {
    let mut map = HashMap::new();
    for &key in keys {
        map.insert(key, value);
    }
    map
}

pub fn make_map_and_fill_reflect(keys: &[i64], value: i64) -> Result<MapValue, ReflectError> {
    let mut map = make_map(Type::of::<i64>(), Type::of::<i64>())?;
    for &key in keys {
        map.set_map_index(Value::of(key), Value::of(value))?;
    }
    Ok(map)
}

pub fn map_keys(map: &HashMap<i64, i64>) -> Vec<i64> {
    let mut keys = Vec::with_capacity(map.len());
    for &key in map.keys() {
        keys.push(key);
    }
    keys
}

pub fn map_keys_reflect(map: &MapValue) -> Vec<Value> {
    map.map_keys()
}
