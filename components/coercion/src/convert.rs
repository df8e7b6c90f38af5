//! Type conversions: ToPrimitive, ToNumber, ToString and ToBoolean.
//!
//! Every conversion is total. Objects are reduced through their conversion
//! hooks at most once per call; hook results that are not primitives are
//! discarded rather than converted again.

use std::cell::RefCell;

use core_types::{ArrayRef, FunctionRef, ObjectRef, PropertyKey, SymbolId, Value};
use tracing::{debug, trace};

use crate::number::{format_number, parse_number};

/// Hint passed to `Symbol.toPrimitive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PreferredType {
    /// No preference (`==` and `+`)
    #[default]
    Default,
    /// Numeric context
    Number,
    /// String context
    String,
}

impl PreferredType {
    /// The hint string handed to `Symbol.toPrimitive`
    pub fn as_str(self) -> &'static str {
        match self {
            PreferredType::Default => "default",
            PreferredType::Number => "number",
            PreferredType::String => "string",
        }
    }
}

/// Reduce a value to a primitive.
///
/// Primitives are returned unchanged. Arrays become their joined string and
/// functions their source text. Objects try `Symbol.toPrimitive` (called
/// with the hint), then `valueOf`, then `toString`; the first hook result
/// that is a primitive wins. An object with no usable hook becomes `NaN`.
///
/// # Examples
///
/// ```
/// use coercion::convert::{to_primitive, PreferredType};
/// use core_types::{ObjectRef, Value};
///
/// let obj = ObjectRef::create(
///     None,
///     [("valueOf", Value::function("valueOf", |_, _| Value::number(7.0)))],
/// );
///
/// assert_eq!(to_primitive(&Value::Object(obj), PreferredType::Number), Value::number(7.0));
/// ```
pub fn to_primitive(value: &Value, hint: PreferredType) -> Value {
    match value {
        Value::Object(obj) => object_to_primitive(obj, hint),
        Value::Array(arr) => Value::String(array_to_string(arr)),
        Value::Function(func) => Value::String(function_source(func)),
        Value::Undefined
        | Value::Null
        | Value::Boolean(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Symbol(_) => value.clone(),
    }
}

fn object_to_primitive(obj: &ObjectRef, hint: PreferredType) -> Value {
    let receiver = Value::Object(obj.clone());
    let hint_arg = [Value::string(hint.as_str())];
    let hooks: [(PropertyKey, &[Value]); 3] = [
        (PropertyKey::Symbol(SymbolId::TO_PRIMITIVE), &hint_arg),
        (PropertyKey::from("valueOf"), &[]),
        (PropertyKey::from("toString"), &[]),
    ];

    for (key, args) in hooks {
        let Some(Value::Function(hook)) = obj.get(key.clone()) else {
            continue;
        };
        let result = hook.call(&receiver, args);
        if result.is_primitive() {
            trace!(hook = %key, hint = hint.as_str(), result = ?result.value_type(), "to_primitive resolved");
            return result;
        }
    }

    debug!(hint = hint.as_str(), "no conversion hook produced a primitive; using NaN");
    Value::Number(f64::NAN)
}

/// ECMAScript ToNumber.
///
/// # Examples
///
/// ```
/// use coercion::convert::to_number;
/// use core_types::Value;
///
/// assert_eq!(to_number(&Value::string(" 12")), 12.0);
/// assert_eq!(to_number(&Value::boolean(true)), 1.0);
/// assert!(to_number(&Value::undefined()).is_nan());
/// ```
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Boolean(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => *n,
        Value::String(s) => parse_number(s),
        Value::Symbol(_) => f64::NAN,
        Value::Object(obj) => to_number(&object_to_primitive(obj, PreferredType::Number)),
        Value::Array(arr) => parse_number(&array_to_string(arr)),
        Value::Function(_) => f64::NAN,
    }
}

/// ECMAScript ToString.
///
/// Symbols render as `"Symbol"`; the description lives in the realm's
/// symbol table, which conversions do not have access to.
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Symbol(_) => "Symbol".to_string(),
        Value::Object(obj) => to_js_string(&object_to_primitive(obj, PreferredType::String)),
        Value::Array(arr) => array_to_string(arr),
        Value::Function(func) => function_source(func),
    }
}

/// ECMAScript ToBoolean
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Symbol(_) | Value::Object(_) | Value::Array(_) | Value::Function(_) => true,
    }
}

thread_local! {
    /// Arrays whose join is in progress on this thread
    static JOINING: RefCell<Vec<ArrayRef>> = const { RefCell::new(Vec::new()) };
}

/// Marks an array as being joined until dropped.
struct JoinGuard;

impl JoinGuard {
    /// Returns `None` when `arr` is already being joined further up the stack.
    fn enter(arr: &ArrayRef) -> Option<JoinGuard> {
        JOINING.with(|joining| {
            let mut joining = joining.borrow_mut();
            if joining.iter().any(|active| active.ptr_eq(arr)) {
                return None;
            }
            joining.push(arr.clone());
            Some(JoinGuard)
        })
    }
}

impl Drop for JoinGuard {
    fn drop(&mut self) {
        JOINING.with(|joining| {
            joining.borrow_mut().pop();
        });
    }
}

/// `Array.prototype.join(",")`: `undefined` and `null` elements render as
/// empty strings.
///
/// An array reached again while it is being joined, directly or through a
/// conversion hook, renders as the empty string.
pub fn array_to_string(arr: &ArrayRef) -> String {
    let Some(_guard) = JoinGuard::enter(arr) else {
        trace!("cyclic array join; rendering as empty string");
        return String::new();
    };
    arr.to_vec()
        .iter()
        .map(|element| match element {
            Value::Undefined | Value::Null => String::new(),
            other => to_js_string(other),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Source text reported for a native function
pub fn function_source(func: &FunctionRef) -> String {
    format!("function {}() {{ [native code] }}", func.name())
}
