//! JavaScript value representation.
//!
//! This module provides the core `Value` enum covering every runtime value.
//! Primitives are stored inline; objects, arrays and functions are shared
//! handles whose identity is what `===` compares.

use std::fmt;

use crate::array::ArrayRef;
use crate::error::{JsError, JsResult};
use crate::function::FunctionRef;
use crate::object::ObjectRef;
use crate::symbol::SymbolId;

/// Represents any JavaScript value.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::undefined();
/// let number = Value::number(42.0);
///
/// assert!(undefined.is_nullish());
/// assert_eq!(number.type_of(), "number");
/// assert_eq!(Value::null().type_of(), "object");
/// ```
#[derive(Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// IEEE 754 double-precision floating point
    Number(f64),
    /// JavaScript string value
    String(String),
    /// Symbol, compared by id
    Symbol(SymbolId),
    /// Object with a property store
    Object(ObjectRef),
    /// Array
    Array(ArrayRef),
    /// Native function
    Function(FunctionRef),
}

/// The type tag of a [`Value`], one per variant.
///
/// Operators dispatch on the pair of tags of their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// boolean
    Boolean,
    /// number
    Number,
    /// string
    String,
    /// symbol
    Symbol,
    /// plain object
    Object,
    /// array
    Array,
    /// function
    Function,
}

impl ValueType {
    /// Lower-case name of the tag
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Undefined => "undefined",
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Symbol => "symbol",
            ValueType::Object => "object",
            ValueType::Array => "array",
            ValueType::Function => "function",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(id) => f.debug_tuple("Symbol").field(&id.id()).finish(),
            Value::Object(obj) => fmt::Debug::fmt(obj, f),
            Value::Array(arr) => fmt::Debug::fmt(arr, f),
            Value::Function(func) => fmt::Debug::fmt(func, f),
        }
    }
}

/// Same-type comparison: content for primitives, identity for references.
///
/// Numbers compare with IEEE semantics, so `NaN != NaN`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Value {
    /// Create undefined value
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a symbol value
    pub fn symbol(id: SymbolId) -> Self {
        Value::Symbol(id)
    }

    /// Wrap an object handle
    pub fn object(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }

    /// Wrap an array handle
    pub fn array(arr: ArrayRef) -> Self {
        Value::Array(arr)
    }

    /// Create array from values
    pub fn array_from(values: Vec<Value>) -> Self {
        Value::Array(ArrayRef::from_vec(values))
    }

    /// Create a named native function value
    pub fn function<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Value::Function(FunctionRef::new(name, func))
    }

    /// The type tag of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Undefined => ValueType::Undefined,
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Symbol(_) => ValueType::Symbol,
            Value::Object(_) => ValueType::Object,
            Value::Array(_) => ValueType::Array,
            Value::Function(_) => ValueType::Function,
        }
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// `null` and arrays report `"object"`, reproducing the language quirk.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::undefined().type_of(), "undefined");
    /// assert_eq!(Value::null().type_of(), "object");
    /// assert_eq!(Value::array_from(vec![]).type_of(), "object");
    /// assert_eq!(Value::string("s").type_of(), "string");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // typeof null === "object"
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(_) => "object",
            Value::Array(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `undefined` or `null`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Check if value is number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is a function
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Objects, arrays and functions; everything that carries identity.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_) | Value::Function(_))
    }

    /// Anything that is not object-like
    pub fn is_primitive(&self) -> bool {
        !self.is_object_like()
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as symbol
    pub fn as_symbol(&self) -> Option<SymbolId> {
        match self {
            Value::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    /// Get as object handle
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as array handle
    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get as function handle
    pub fn as_function(&self) -> Option<&FunctionRef> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Call this value as a function.
    ///
    /// Fails with a `TypeError` when the value is not callable.
    pub fn call(&self, receiver: &Value, args: &[Value]) -> JsResult<Value> {
        match self {
            Value::Function(func) => Ok(func.call(receiver, args)),
            other => Err(JsError::type_error(format!(
                "{} is not a function",
                other.type_of()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<SymbolId> for Value {
    fn from(id: SymbolId) -> Self {
        Value::Symbol(id)
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

impl From<ArrayRef> for Value {
    fn from(arr: ArrayRef) -> Self {
        Value::Array(arr)
    }
}

impl From<FunctionRef> for Value {
    fn from(func: FunctionRef) -> Self {
        Value::Function(func)
    }
}
