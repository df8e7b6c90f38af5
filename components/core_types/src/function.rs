//! Native callables.
//!
//! A function receives its receiver (`this`) and its arguments and always
//! returns a value. Failing is not part of the calling convention: hooks that
//! cannot produce anything meaningful return `undefined`.

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

type NativeFn = dyn Fn(&Value, &[Value]) -> Value;

struct FunctionData {
    name: String,
    func: Box<NativeFn>,
}

/// Shared handle to a native function.
///
/// Cloning the handle shares the function; equality is reference identity.
///
/// # Examples
///
/// ```
/// use core_types::{FunctionRef, Value};
///
/// let double = FunctionRef::new("double", |_this, args| match args.first() {
///     Some(Value::Number(n)) => Value::number(n * 2.0),
///     _ => Value::undefined(),
/// });
///
/// let result = double.call(&Value::undefined(), &[Value::number(21.0)]);
/// assert_eq!(result, Value::number(42.0));
/// ```
#[derive(Clone)]
pub struct FunctionRef(Rc<FunctionData>);

impl FunctionRef {
    /// Wrap a closure as a named native function
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        FunctionRef(Rc::new(FunctionData {
            name: name.into(),
            func: Box::new(func),
        }))
    }

    /// The function's name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Invoke the function with `this` bound to `receiver`
    pub fn call(&self, receiver: &Value, args: &[Value]) -> Value {
        (self.0.func)(receiver, args)
    }

    /// Whether both handles refer to the same function
    pub fn ptr_eq(&self, other: &FunctionRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function").field(&self.0.name).finish()
    }
}
