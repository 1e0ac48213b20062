//! Function calls, static and dynamic.

use super::single_int;
use crate::error::ReflectError;
use crate::model::multiply;
use crate::reflect::{make_func, DynFn, FuncType, FuncValue, Type, Value};
use std::sync::Arc;

pub fn call_func(a: i64, b: i64) -> i64 {
    multiply(a, b)
}

/// Wraps `multiply` into a [`FuncValue`] and calls it, as a fresh lookup
/// would on every call.
pub fn call_func_reflect(a: i64, b: i64) -> Result<i64, ReflectError> {
    let f = FuncValue::of2(multiply);
    let results = f.call(&[Value::of(a), Value::of(b)])?;
    single_int(&results)
}

/// Base for the dynamic-function pair: takes its arguments as a slice.
pub fn multiply_slice(args: &[i64]) -> i64 {
    match args {
        [a, b] => multiply(*a, *b),
        _ => 0,
    }
}

/// Wraps `base` in a fresh two-argument closure and calls it.
pub fn make_func_and_call(base: &dyn Fn(&[i64]) -> i64, a: i64, b: i64) -> i64 {
    let f: Box<dyn Fn(i64, i64) -> i64 + '_> = Box::new(move |a: i64, b: i64| base(&[a, b]));
    f(a, b)
}

/// Dynamic body for the reflective half of the pair.
pub fn multiply_impl(args: &[Value]) -> Result<Vec<Value>, ReflectError> {
    match args {
        [a, b] => Ok(vec![Value::of(multiply(a.int()?, b.int()?))]),
        _ => Err(ReflectError::ArityMismatch {
            expected: 2,
            found: args.len(),
        }),
    }
}

pub fn multiply_impl_fn() -> DynFn {
    Arc::new(multiply_impl)
}

/// `fn(i64, i64) -> i64`
pub fn int_binary_type() -> FuncType {
    FuncType::new(
        vec![Type::of::<i64>(), Type::of::<i64>()],
        vec![Type::of::<i64>()],
    )
}

/// Builds a function of type `ty` from `imp` and calls it.
pub fn make_func_and_call_reflect(
    ty: &FuncType,
    imp: &DynFn,
    a: i64,
    b: i64,
) -> Result<i64, ReflectError> {
    let f = make_func(ty.clone(), Arc::clone(imp));
    let results = f.call(&[Value::of(a), Value::of(b)])?;
    single_int(&results)
}
