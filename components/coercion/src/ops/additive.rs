//! The `+` operator.

use core_types::Value;

use crate::convert::{to_js_string, to_number, to_primitive, PreferredType};

/// Addition (`+`).
///
/// Both operands are reduced with ToPrimitive first. A string on either
/// side makes the result a concatenation; otherwise the operands are added
/// as numbers. A symbol without a string partner gives `NaN`.
///
/// # Examples
///
/// ```
/// use coercion::ops::add;
/// use core_types::Value;
///
/// assert_eq!(add(&Value::string("a"), &Value::number(1.0)), Value::string("a1"));
/// assert_eq!(add(&Value::boolean(true), &Value::number(1.0)), Value::number(2.0));
/// assert_eq!(add(&Value::null(), &Value::number(1.0)), Value::number(1.0));
/// ```
pub fn add(x: &Value, y: &Value) -> Value {
    let left = to_primitive(x, PreferredType::Default);
    let right = to_primitive(y, PreferredType::Default);

    match (&left, &right) {
        (Value::String(a), Value::String(b)) => Value::String(format!("{}{}", a, b)),
        (Value::String(a), other) => Value::String(format!("{}{}", a, to_js_string(other))),
        (other, Value::String(b)) => Value::String(format!("{}{}", to_js_string(other), b)),
        (Value::Symbol(_), _) | (_, Value::Symbol(_)) => Value::Number(f64::NAN),
        // Both sides are non-string, non-symbol primitives here
        _ => Value::Number(to_number(&left) + to_number(&right)),
    }
}
