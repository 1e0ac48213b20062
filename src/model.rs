//! The subjects the benchmarks operate on: a free function and a one-field
//! record with a method.

use crate::error::ReflectError;
use crate::reflect::{Field, FuncType, Kind, Method, Reflect, Type, Value};
use std::any::Any;

/// Product of `a` and `b`, wrapping on overflow.
pub fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Foo {
    pub value: i64,
}

impl Foo {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn multiply(&self, x: i64) -> i64 {
        multiply(self.value, x)
    }
}

static FOO_FIELDS: [Field; 1] = [Field {
    name: "value",
    ty: Type::of::<i64>,
    get: foo_value,
    get_mut: foo_value_mut,
}];

static FOO_METHODS: [Method; 1] = [Method {
    name: "multiply",
    ty: foo_multiply_type,
    call: foo_multiply,
}];

fn foo_value(any: &dyn Any) -> Option<&dyn Any> {
    any.downcast_ref::<Foo>().map(|foo| &foo.value as &dyn Any)
}

fn foo_value_mut(any: &mut dyn Any) -> Option<&mut dyn Any> {
    any.downcast_mut::<Foo>()
        .map(|foo| &mut foo.value as &mut dyn Any)
}

fn foo_multiply_type() -> FuncType {
    FuncType::new(vec![Type::of::<i64>()], vec![Type::of::<i64>()])
}

fn foo_multiply(recv: &dyn Any, args: &[Value]) -> Result<Vec<Value>, ReflectError> {
    let foo = recv
        .downcast_ref::<Foo>()
        .ok_or(ReflectError::TypeMismatch {
            expected: Foo::NAME,
            found: "unknown",
        })?;
    match args {
        [x] => Ok(vec![Value::of(foo.multiply(x.int()?))]),
        _ => Err(ReflectError::ArityMismatch {
            expected: 1,
            found: args.len(),
        }),
    }
}

impl Reflect for Foo {
    const NAME: &'static str = "Foo";
    const KIND: Kind = Kind::Struct;

    fn fields() -> &'static [Field] {
        &FOO_FIELDS
    }

    fn methods() -> &'static [Method] {
        &FOO_METHODS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn multiply_matches_operator(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
            prop_assert_eq!(multiply(a, b), a * b);
        }

        #[test]
        fn multiply_is_commutative(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }

        #[test]
        fn multiply_identity_and_zero(a in any::<i64>()) {
            prop_assert_eq!(multiply(a, 1), a);
            prop_assert_eq!(multiply(1, a), a);
            prop_assert_eq!(multiply(a, 0), 0);
            prop_assert_eq!(multiply(0, a), 0);
        }

        #[test]
        fn method_matches_free_function(value in any::<i64>(), x in any::<i64>()) {
            prop_assert_eq!(Foo::new(value).multiply(x), multiply(value, x));
        }
    }

    #[test]
    fn foo_describes_its_field() {
        let ty = Type::of::<Foo>();
        assert_eq!(ty.kind(), Kind::Struct);
        let field = ty.field_by_name("value").unwrap();
        assert_eq!((field.ty)(), Type::of::<i64>());
        assert_eq!(
            ty.field_by_name("missing").unwrap_err(),
            ReflectError::NoSuchField {
                ty: "Foo",
                field: "missing".to_string()
            }
        );
    }

    #[test]
    fn field_access_through_value() {
        let mut foo = Value::zero(Type::of::<Foo>());
        foo.field_mut("value").unwrap().set_int(42).unwrap();
        assert_eq!(foo.field("value").unwrap(), Value::of(42i64));
        foo.field_mut("value").unwrap().set(Value::of(7i64)).unwrap();
        assert_eq!(foo.downcast_ref::<Foo>(), Ok(&Foo::new(7)));
        assert!(foo.field_mut("value").unwrap().set(Value::of(7i32)).is_err());
    }

    #[test]
    fn method_call_through_value() {
        let foo = Value::of(Foo::new(6));
        let method = foo.method_by_name("multiply").unwrap();
        assert_eq!(method.ty(), foo_multiply_type());
        assert_eq!(method.call(&[Value::of(7i64)]), Ok(vec![Value::of(42i64)]));
        assert_eq!(
            method.call(&[]).unwrap_err(),
            ReflectError::ArityMismatch {
                expected: 1,
                found: 0
            }
        );
        assert!(matches!(
            foo.method_by_name("divide"),
            Err(ReflectError::NoSuchMethod { .. })
        ));
    }
}
