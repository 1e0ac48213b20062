use super::types::{Reflect, Type};
use super::value::Value;
use crate::error::ReflectError;
use std::fmt;
use std::sync::Arc;

/// Dynamic implementation behind a [`FuncValue`].
pub type DynFn = Arc<dyn Fn(&[Value]) -> Result<Vec<Value>, ReflectError> + Send + Sync>;

/// Signature of a dynamically callable function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    params: Vec<Type>,
    results: Vec<Type>,
}

impl FuncType {
    pub fn new(params: Vec<Type>, results: Vec<Type>) -> Self {
        Self { params, results }
    }

    pub fn params(&self) -> &[Type] {
        &self.params
    }

    pub fn results(&self) -> &[Type] {
        &self.results
    }

    pub fn check_args(&self, args: &[Value]) -> Result<(), ReflectError> {
        if args.len() != self.params.len() {
            return Err(ReflectError::ArityMismatch {
                expected: self.params.len(),
                found: args.len(),
            });
        }
        check_types(&self.params, args)
    }

    pub fn check_results(&self, results: &[Value]) -> Result<(), ReflectError> {
        if results.len() != self.results.len() {
            return Err(ReflectError::ResultCount {
                expected: self.results.len(),
                found: results.len(),
            });
        }
        check_types(&self.results, results)
    }
}

fn check_types(expected: &[Type], values: &[Value]) -> Result<(), ReflectError> {
    expected
        .iter()
        .zip(values)
        .try_for_each(|(ty, value)| ty.expect(&value.ty()))
}

/// A callable value: a closure over dynamic arguments plus the signature it
/// is checked against on every call.
#[derive(Clone)]
pub struct FuncValue {
    ty: FuncType,
    imp: DynFn,
}

impl FuncValue {
    /// Wraps a statically typed two-argument function.
    pub fn of2<A, B, R>(f: fn(A, B) -> R) -> Self
    where
        A: Reflect,
        B: Reflect,
        R: Reflect,
    {
        let ty = FuncType::new(
            vec![Type::of::<A>(), Type::of::<B>()],
            vec![Type::of::<R>()],
        );
        let imp: DynFn = Arc::new(move |args: &[Value]| -> Result<Vec<Value>, ReflectError> {
            match args {
                [a, b] => {
                    let a = a.downcast_ref::<A>()?.clone();
                    let b = b.downcast_ref::<B>()?.clone();
                    Ok(vec![Value::of(f(a, b))])
                }
                _ => Err(ReflectError::ArityMismatch {
                    expected: 2,
                    found: args.len(),
                }),
            }
        });
        Self { ty, imp }
    }

    pub fn ty(&self) -> &FuncType {
        &self.ty
    }

    pub fn call(&self, args: &[Value]) -> Result<Vec<Value>, ReflectError> {
        self.ty.check_args(args)?;
        let results = (self.imp)(args)?;
        self.ty.check_results(&results)?;
        Ok(results)
    }
}

impl fmt::Debug for FuncValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncValue").field("ty", &self.ty).finish()
    }
}

/// Builds a function of type `ty` whose body is `imp`.
pub fn make_func(ty: FuncType, imp: DynFn) -> FuncValue {
    FuncValue { ty, imp }
}
