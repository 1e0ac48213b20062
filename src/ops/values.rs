//! Scalars and records.

use super::single_int;
use crate::error::ReflectError;
use crate::model::Foo;
use crate::reflect::{Type, Value};

pub fn init_var(value: i64) -> i64 {
    let var: i64 = value;
    var
}

pub fn init_var_reflect(value: i64) -> Value {
    Value::of(value)
}

pub fn new_struct_and_set_field(value: i64) -> Foo {
    let mut foo = Foo::default();
    foo.value = value;
    foo
}

/// Builds a zero `Foo` from its type descriptor and sets `value` by name.
pub fn new_struct_and_set_field_reflect(value: i64) -> Result<Value, ReflectError> {
    let mut foo = Value::zero(Type::of::<Foo>());
    foo.field_mut("value")?.set_int(value)?;
    Ok(foo)
}

pub fn call_struct_method(foo: &Foo, x: i64) -> i64 {
    foo.multiply(x)
}

pub fn call_struct_method_reflect(foo: &Value, x: i64) -> Result<i64, ReflectError> {
    let results = foo.method_by_name("multiply")?.call(&[Value::of(x)])?;
    single_int(&results)
}
