use super::types::{Reflect, Type};
use super::value::Value;
use crate::error::ReflectError;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Key wrapper hashing through the key type's reflected hash.
#[derive(Debug, Clone, PartialEq)]
struct MapKey(Value);

impl Eq for MapKey {}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_into(state);
    }
}

/// Hash map whose key and element types are only known at runtime.
#[derive(Debug, Clone)]
pub struct MapValue {
    key: Type,
    elem: Type,
    entries: HashMap<MapKey, Value>,
}

pub fn make_map(key: Type, elem: Type) -> Result<MapValue, ReflectError> {
    make_map_with_size(key, elem, 0)
}

pub fn make_map_with_size(key: Type, elem: Type, size: usize) -> Result<MapValue, ReflectError> {
    if !key.is_hashable() {
        return Err(ReflectError::NotHashable(key.name()));
    }
    Ok(MapValue {
        key,
        elem,
        entries: HashMap::with_capacity(size),
    })
}

impl MapValue {
    /// Reflective view of a statically typed map.
    pub fn from_map<K, V>(map: &HashMap<K, V>) -> Result<Self, ReflectError>
    where
        K: Reflect + Hash + Eq,
        V: Reflect,
    {
        let mut value = make_map_with_size(Type::of::<K>(), Type::of::<V>(), map.len())?;
        for (k, v) in map {
            value.set_map_index(Value::of(k.clone()), Value::of(v.clone()))?;
        }
        Ok(value)
    }

    pub fn key_type(&self) -> Type {
        self.key
    }

    pub fn elem_type(&self) -> Type {
        self.elem
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_map_index(&mut self, key: Value, value: Value) -> Result<(), ReflectError> {
        self.key.expect(&key.ty())?;
        self.elem.expect(&value.ty())?;
        self.entries.insert(MapKey(key), value);
        Ok(())
    }

    pub fn map_index(&self, key: &Value) -> Option<&Value> {
        self.entries.get(&MapKey(key.clone()))
    }

    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        self.entries.remove(&MapKey(key.clone()))
    }

    /// All keys, in unspecified order.
    pub fn map_keys(&self) -> Vec<Value> {
        self.entries.keys().map(|key| key.0.clone()).collect()
    }

    pub fn to_hash_map<K, V>(&self) -> Result<HashMap<K, V>, ReflectError>
    where
        K: Reflect + Hash + Eq,
        V: Reflect,
    {
        self.entries
            .iter()
            .map(|(key, value)| -> Result<(K, V), ReflectError> {
                Ok((
                    key.0.downcast_ref::<K>()?.clone(),
                    value.downcast_ref::<V>()?.clone(),
                ))
            })
            .collect()
    }
}
