use super::types::{Reflect, Type};
use super::value::Value;
use crate::error::ReflectError;

/// Growable sequence whose element type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceValue {
    elem: Type,
    items: Vec<Value>,
}

/// A sequence of `len` zero values of `elem` with room for `cap`.
pub fn make_slice(elem: Type, len: usize, cap: usize) -> SliceValue {
    let mut items = Vec::with_capacity(cap.max(len));
    items.extend((0..len).map(|_| Value::zero(elem)));
    SliceValue { elem, items }
}

impl SliceValue {
    pub fn elem(&self) -> Type {
        self.elem
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self, i: usize) -> Option<&Value> {
        self.items.get(i)
    }

    pub fn append(&mut self, value: Value) -> Result<(), ReflectError> {
        self.elem.expect(&value.ty())?;
        self.items.push(value);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Copies the elements out into a statically typed vector.
    pub fn to_vec<T: Reflect>(&self) -> Result<Vec<T>, ReflectError> {
        self.items
            .iter()
            .map(|value| value.downcast_ref::<T>().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_slice_zero_fills() {
        let slice = make_slice(Type::of::<i64>(), 3, 0);
        assert_eq!(slice.len(), 3);
        assert_eq!(slice.to_vec::<i64>().unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn append_checks_element_type() {
        let mut slice = make_slice(Type::of::<i64>(), 0, 0);
        slice.append(Value::of(7i64)).unwrap();
        assert!(slice.append(Value::of(7i32)).is_err());
        assert_eq!(slice.len(), 1);
        assert_eq!(slice.index(0), Some(&Value::of(7i64)));
    }

    #[test]
    fn iter_yields_elements_in_order() {
        let mut slice = make_slice(Type::of::<i64>(), 0, 3);
        for i in 1..=3i64 {
            slice.append(Value::of(i)).unwrap();
        }
        let ints: Vec<i64> = slice.iter().map(|v| v.int().unwrap()).collect();
        assert_eq!(ints, vec![1, 2, 3]);
    }

    #[test]
    fn to_vec_rejects_other_types() {
        let slice = make_slice(Type::of::<bool>(), 1, 1);
        assert!(slice.to_vec::<i64>().is_err());
    }
}
