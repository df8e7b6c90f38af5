//! `==`, `===` and SameValueZero.

use core_types::Value;

use crate::convert::{to_primitive, PreferredType};
use crate::number::parse_number;

/// Abstract equality (`==`).
///
/// Nullish values equal only each other. References compare by identity
/// when both sides are references; otherwise the reference is reduced with
/// ToPrimitive. Booleans compare as numbers and a number against a string
/// compares as numbers. Symbols equal only the same symbol.
///
/// # Examples
///
/// ```
/// use coercion::ops::eq;
/// use core_types::Value;
///
/// assert!(eq(&Value::undefined(), &Value::null()));
/// assert!(eq(&Value::number(1.0), &Value::string("1")));
/// assert!(eq(&Value::boolean(true), &Value::string("1")));
/// assert!(!eq(&Value::null(), &Value::number(0.0)));
/// ```
pub fn eq(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,

        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Symbol(a), Value::Symbol(b)) => a == b,
        (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
        (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        (
            Value::Object(_) | Value::Array(_) | Value::Function(_),
            Value::Object(_) | Value::Array(_) | Value::Function(_),
        ) => false,

        (Value::Boolean(b), other) => eq(&bool_as_number(*b), other),
        (other, Value::Boolean(b)) => eq(other, &bool_as_number(*b)),

        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            *n == parse_number(s)
        }

        (Value::Object(_) | Value::Array(_) | Value::Function(_), other) => {
            eq(&to_primitive(x, PreferredType::Default), other)
        }
        (other, Value::Object(_) | Value::Array(_) | Value::Function(_)) => {
            eq(other, &to_primitive(y, PreferredType::Default))
        }

        (Value::Symbol(_), _) | (_, Value::Symbol(_)) => false,
    }
}

/// `!=`
pub fn ne(x: &Value, y: &Value) -> bool {
    !eq(x, y)
}

/// Strict equality (`===`): no coercion, tags must match.
pub fn seq(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Symbol(a), Value::Symbol(b)) => a == b,
        (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
        (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        (
            Value::Undefined
            | Value::Null
            | Value::Boolean(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Symbol(_)
            | Value::Object(_)
            | Value::Array(_)
            | Value::Function(_),
            _,
        ) => false,
    }
}

/// `!==`
pub fn sne(x: &Value, y: &Value) -> bool {
    !seq(x, y)
}

/// SameValueZero: `===` except that `NaN` equals `NaN`.
pub fn same_value_zero(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        _ => seq(x, y),
    }
}

fn bool_as_number(b: bool) -> Value {
    Value::Number(if b { 1.0 } else { 0.0 })
}
