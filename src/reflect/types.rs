use super::func::FuncType;
use super::value::Value;
use crate::error::ReflectError;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    String,
    Struct,
}

/// A type the reflection layer can describe at runtime.
///
/// Implementors provide the pieces `std::any::Any` cannot: a short name, a
/// kind, optional hashing for use as a map key, integer access, and the
/// field and method tables of records.
pub trait Reflect: Any + Send + Clone + Default + PartialEq + fmt::Debug {
    const NAME: &'static str;
    const KIND: Kind;
    const HASHABLE: bool = false;

    fn reflect_hash(&self, _state: &mut dyn Hasher) {}

    fn to_int(&self) -> Option<i64> {
        None
    }

    fn set_int(&mut self, _value: i64) -> bool {
        false
    }

    fn fields() -> &'static [Field] {
        &[]
    }

    fn methods() -> &'static [Method] {
        &[]
    }
}

/// A named field of a record, accessed through type-erased references.
#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub ty: fn() -> Type,
    pub get: fn(&dyn Any) -> Option<&dyn Any>,
    pub get_mut: fn(&mut dyn Any) -> Option<&mut dyn Any>,
}

/// A named method. `call` receives the receiver and arguments already
/// checked against `ty`.
#[derive(Debug)]
pub struct Method {
    pub name: &'static str,
    pub ty: fn() -> FuncType,
    pub call: fn(&dyn Any, &[Value]) -> Result<Vec<Value>, ReflectError>,
}

/// Runtime type descriptor: identity plus the monomorphized operations
/// needed to build and mutate values of the type without knowing it
/// statically.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    name: &'static str,
    kind: Kind,
    hashable: bool,
    pub(crate) zero: fn() -> Value,
    pub(crate) to_value: fn(&dyn Any) -> Option<Value>,
    pub(crate) set_int: fn(&mut dyn Any, i64) -> bool,
    pub(crate) assign: fn(&mut dyn Any, Box<dyn Any>) -> bool,
    pub(crate) fields: fn() -> &'static [Field],
    pub(crate) methods: fn() -> &'static [Method],
}

impl Type {
    pub fn of<T: Reflect>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::NAME,
            kind: T::KIND,
            hashable: T::HASHABLE,
            zero: zero_of::<T>,
            to_value: to_value_of::<T>,
            set_int: set_int_of::<T>,
            assign: assign_of::<T>,
            fields: T::fields,
            methods: T::methods,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_hashable(&self) -> bool {
        self.hashable
    }

    pub fn fields(&self) -> &'static [Field] {
        (self.fields)()
    }

    pub fn field_by_name(&self, name: &str) -> Result<&'static Field, ReflectError> {
        if self.kind != Kind::Struct {
            return Err(ReflectError::NotAStruct(self.name));
        }
        self.fields()
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| ReflectError::NoSuchField {
                ty: self.name,
                field: name.to_string(),
            })
    }

    pub fn methods(&self) -> &'static [Method] {
        (self.methods)()
    }

    pub fn method_by_name(&self, name: &str) -> Result<&'static Method, ReflectError> {
        self.methods()
            .iter()
            .find(|method| method.name == name)
            .ok_or_else(|| ReflectError::NoSuchMethod {
                ty: self.name,
                method: name.to_string(),
            })
    }

    pub(crate) fn expect(&self, found: &Type) -> Result<(), ReflectError> {
        if self == found {
            Ok(())
        } else {
            Err(ReflectError::TypeMismatch {
                expected: self.name,
                found: found.name,
            })
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn zero_of<T: Reflect>() -> Value {
    Value::of(T::default())
}

fn to_value_of<T: Reflect>(any: &dyn Any) -> Option<Value> {
    any.downcast_ref::<T>().map(|value| Value::of(value.clone()))
}

fn set_int_of<T: Reflect>(any: &mut dyn Any, value: i64) -> bool {
    any.downcast_mut::<T>().is_some_and(|slot| slot.set_int(value))
}

fn assign_of<T: Reflect>(any: &mut dyn Any, value: Box<dyn Any>) -> bool {
    match (any.downcast_mut::<T>(), value.downcast::<T>()) {
        (Some(slot), Ok(value)) => {
            *slot = *value;
            true
        }
        _ => false,
    }
}

macro_rules! reflect_int {
    ($($ty:ty => $name:literal, $kind:ident;)*) => {$(
        impl Reflect for $ty {
            const NAME: &'static str = $name;
            const KIND: Kind = Kind::$kind;
            const HASHABLE: bool = true;

            fn reflect_hash(&self, mut state: &mut dyn Hasher) {
                self.hash(&mut state);
            }

            fn to_int(&self) -> Option<i64> {
                i64::try_from(*self).ok()
            }

            fn set_int(&mut self, value: i64) -> bool {
                match <$ty>::try_from(value) {
                    Ok(value) => {
                        *self = value;
                        true
                    }
                    Err(_) => false,
                }
            }
        }
    )*};
}

reflect_int! {
    i32 => "i32", Int;
    i64 => "i64", Int;
    u64 => "u64", Uint;
}

impl Reflect for bool {
    const NAME: &'static str = "bool";
    const KIND: Kind = Kind::Bool;
    const HASHABLE: bool = true;

    fn reflect_hash(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }
}

impl Reflect for String {
    const NAME: &'static str = "String";
    const KIND: Kind = Kind::String;
    const HASHABLE: bool = true;

    fn reflect_hash(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }
}
