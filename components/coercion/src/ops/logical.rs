//! `&&`, `||`, `!` and `??`.
//!
//! The binary forms return one of their operands unchanged, never a
//! coerced boolean.

use core_types::Value;

use crate::convert::to_boolean;

/// `x && y`: `y` when `x` is truthy, otherwise `x`
pub fn and(x: &Value, y: &Value) -> Value {
    if to_boolean(x) {
        y.clone()
    } else {
        x.clone()
    }
}

/// `x || y`: `x` when `x` is truthy, otherwise `y`
pub fn or(x: &Value, y: &Value) -> Value {
    if to_boolean(x) {
        x.clone()
    } else {
        y.clone()
    }
}

/// `!x`
pub fn not(x: &Value) -> bool {
    !to_boolean(x)
}

/// Nullish coalescing (`x ?? y`).
///
/// Only `undefined` and `null` on the left select the right operand;
/// falsy values such as `0` or `""` are kept.
///
/// # Examples
///
/// ```
/// use coercion::ops::nc;
/// use core_types::Value;
///
/// assert_eq!(nc(&Value::undefined(), &Value::number(5.0)), Value::number(5.0));
/// assert_eq!(nc(&Value::number(0.0), &Value::number(5.0)), Value::number(0.0));
/// ```
pub fn nc(x: &Value, y: &Value) -> Value {
    if x.is_nullish() {
        y.clone()
    } else {
        x.clone()
    }
}
