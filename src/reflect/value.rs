use super::func::FuncType;
use super::types::{Field, Kind, Method, Reflect, Type};
use crate::error::ReflectError;
use std::any::Any;
use std::fmt;
use std::hash::Hasher;

/// Object-safe view of a [`Reflect`] value.
pub(crate) trait Erased: Send {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn clone_erased(&self) -> Box<dyn Erased>;
    fn eq_erased(&self, other: &dyn Erased) -> bool;
    fn hash_erased(&self, state: &mut dyn Hasher);
    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    fn to_int_erased(&self) -> Option<i64>;
    fn set_int_erased(&mut self, value: i64) -> bool;
}

impl<T: Reflect> Erased for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_erased(&self) -> Box<dyn Erased> {
        Box::new(self.clone())
    }

    fn eq_erased(&self, other: &dyn Erased) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn hash_erased(&self, state: &mut dyn Hasher) {
        self.reflect_hash(state);
    }

    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }

    fn to_int_erased(&self) -> Option<i64> {
        self.to_int()
    }

    fn set_int_erased(&mut self, value: i64) -> bool {
        self.set_int(value)
    }
}

/// A type-erased value together with its runtime type descriptor.
pub struct Value {
    ty: Type,
    data: Box<dyn Erased>,
}

impl Value {
    pub fn of<T: Reflect>(value: T) -> Self {
        Self {
            ty: Type::of::<T>(),
            data: Box::new(value),
        }
    }

    /// The default value of `ty`, built without knowing the type statically.
    pub fn zero(ty: Type) -> Self {
        (ty.zero)()
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn kind(&self) -> Kind {
        self.ty.kind()
    }

    pub fn is<T: Reflect>(&self) -> bool {
        self.ty == Type::of::<T>()
    }

    pub fn int(&self) -> Result<i64, ReflectError> {
        self.data
            .to_int_erased()
            .ok_or(ReflectError::TypeMismatch {
                expected: "integer",
                found: self.ty.name(),
            })
    }

    pub fn set_int(&mut self, value: i64) -> Result<(), ReflectError> {
        if self.data.set_int_erased(value) {
            Ok(())
        } else {
            Err(ReflectError::TypeMismatch {
                expected: self.ty.name(),
                found: "i64",
            })
        }
    }

    pub fn downcast_ref<T: Reflect>(&self) -> Result<&T, ReflectError> {
        self.data
            .as_any()
            .downcast_ref::<T>()
            .ok_or(ReflectError::TypeMismatch {
                expected: T::NAME,
                found: self.ty.name(),
            })
    }

    pub fn downcast_mut<T: Reflect>(&mut self) -> Result<&mut T, ReflectError> {
        let found = self.ty.name();
        self.data
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(ReflectError::TypeMismatch {
                expected: T::NAME,
                found,
            })
    }

    pub fn into_inner<T: Reflect>(self) -> Result<T, ReflectError> {
        let found = self.ty.name();
        self.data
            .into_any()
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| ReflectError::TypeMismatch {
                expected: T::NAME,
                found,
            })
    }

    /// Copy of the named field.
    pub fn field(&self, name: &str) -> Result<Value, ReflectError> {
        let field = self.ty.field_by_name(name)?;
        let ty = (field.ty)();
        (field.get)(self.data.as_any())
            .and_then(|slot| (ty.to_value)(slot))
            .ok_or(ReflectError::TypeMismatch {
                expected: self.ty.name(),
                found: ty.name(),
            })
    }

    /// Settable handle on the named field.
    pub fn field_mut(&mut self, name: &str) -> Result<FieldMut<'_>, ReflectError> {
        let owner = self.ty;
        let field = owner.field_by_name(name)?;
        let slot = (field.get_mut)(self.data.as_any_mut()).ok_or(ReflectError::TypeMismatch {
            expected: owner.name(),
            found: "unknown",
        })?;
        Ok(FieldMut { field, slot })
    }

    pub fn method_by_name(&self, name: &str) -> Result<BoundMethod<'_>, ReflectError> {
        let method = self.ty.method_by_name(name)?;
        Ok(BoundMethod { recv: self, method })
    }

    pub(crate) fn hash_into(&self, state: &mut dyn Hasher) {
        self.data.hash_erased(state);
    }

    pub(crate) fn into_any(self) -> Box<dyn Any> {
        self.data.into_any()
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Self {
            ty: self.ty,
            data: self.data.clone_erased(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.data.eq_erased(&*other.data)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt_erased(f)
    }
}

/// Mutable access to one field of a record [`Value`].
pub struct FieldMut<'a> {
    field: &'static Field,
    slot: &'a mut dyn Any,
}

impl FieldMut<'_> {
    pub fn name(&self) -> &'static str {
        self.field.name
    }

    pub fn ty(&self) -> Type {
        (self.field.ty)()
    }

    pub fn get(&self) -> Result<Value, ReflectError> {
        let ty = self.ty();
        (ty.to_value)(&*self.slot).ok_or(ReflectError::TypeMismatch {
            expected: ty.name(),
            found: "unknown",
        })
    }

    pub fn set_int(&mut self, value: i64) -> Result<(), ReflectError> {
        let ty = self.ty();
        if (ty.set_int)(&mut *self.slot, value) {
            Ok(())
        } else {
            Err(ReflectError::TypeMismatch {
                expected: ty.name(),
                found: "i64",
            })
        }
    }

    pub fn set(&mut self, value: Value) -> Result<(), ReflectError> {
        let ty = self.ty();
        ty.expect(&value.ty())?;
        if (ty.assign)(&mut *self.slot, value.into_any()) {
            Ok(())
        } else {
            Err(ReflectError::TypeMismatch {
                expected: ty.name(),
                found: "unknown",
            })
        }
    }
}

/// A method looked up by name and bound to its receiver.
pub struct BoundMethod<'a> {
    recv: &'a Value,
    method: &'static Method,
}

impl BoundMethod<'_> {
    pub fn name(&self) -> &'static str {
        self.method.name
    }

    pub fn ty(&self) -> FuncType {
        (self.method.ty)()
    }

    pub fn call(&self, args: &[Value]) -> Result<Vec<Value>, ReflectError> {
        let ty = self.ty();
        ty.check_args(args)?;
        let results = (self.method.call)(self.recv.data.as_any(), args)?;
        ty.check_results(&results)?;
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_any() {
        let value = Value::of(42i64);
        assert!(value.is::<i64>());
        assert_eq!(value.kind(), Kind::Int);
        assert_eq!(value.int(), Ok(42));
        assert_eq!(value.downcast_ref::<i64>(), Ok(&42));
        assert_eq!(value.into_inner::<i64>(), Ok(42));
    }

    #[test]
    fn wrong_downcast_is_reported() {
        let value = Value::of(true);
        assert_eq!(
            value.downcast_ref::<i64>().unwrap_err(),
            ReflectError::TypeMismatch {
                expected: "i64",
                found: "bool"
            }
        );
        assert!(value.int().is_err());
    }

    #[test]
    fn zero_matches_default() {
        assert_eq!(Value::zero(Type::of::<i64>()), Value::of(0i64));
        assert_eq!(Value::zero(Type::of::<String>()), Value::of(String::new()));
    }

    #[test]
    fn equality_needs_same_type() {
        assert_eq!(Value::of(1i64), Value::of(1i64));
        assert_ne!(Value::of(1i64), Value::of(1i32));
        assert_ne!(Value::of(1i64), Value::of(2i64));
    }

    #[test]
    fn set_int_in_place() {
        let mut value = Value::of(0i32);
        value.set_int(12).unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Ok(&12));
        assert!(Value::of(false).set_int(1).is_err());
    }

    #[test]
    fn clone_is_deep() {
        let original = Value::of(String::from("a"));
        let mut copy = original.clone();
        copy.downcast_mut::<String>().unwrap().push('b');
        assert_eq!(original.downcast_ref::<String>().unwrap(), "a");
        assert_eq!(copy.downcast_ref::<String>().unwrap(), "ab");
    }
}
