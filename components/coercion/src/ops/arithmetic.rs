//! Numeric and bitwise operators.
//!
//! Every operand goes through ToNumber; bitwise operators additionally wrap
//! through ToInt32 or ToUint32.

use core_types::Value;

use crate::convert::to_number;
use crate::number::{to_int32, to_uint32};

/// `x - y`
pub fn sub(x: &Value, y: &Value) -> Value {
    Value::Number(to_number(x) - to_number(y))
}

/// `x * y`
pub fn mul(x: &Value, y: &Value) -> Value {
    Value::Number(to_number(x) * to_number(y))
}

/// `x / y`
pub fn div(x: &Value, y: &Value) -> Value {
    Value::Number(to_number(x) / to_number(y))
}

/// `x % y`, the truncating remainder; the result takes the sign of `x`.
pub fn rem(x: &Value, y: &Value) -> Value {
    Value::Number(to_number(x) % to_number(y))
}

/// `x ** y`.
///
/// Unlike `f64::powf`, a `NaN` exponent always gives `NaN`, as does a base
/// of magnitude 1 raised to an infinite power.
pub fn pow(x: &Value, y: &Value) -> Value {
    let base = to_number(x);
    let exponent = to_number(y);
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return Value::Number(f64::NAN);
    }
    Value::Number(base.powf(exponent))
}

/// Unary `-x`
pub fn neg(x: &Value) -> Value {
    Value::Number(-to_number(x))
}

/// Unary `+x`
pub fn plus(x: &Value) -> Value {
    Value::Number(to_number(x))
}

/// `x + 1` as produced by `++`
pub fn inc(x: &Value) -> Value {
    Value::Number(to_number(x) + 1.0)
}

/// `x - 1` as produced by `--`
pub fn dec(x: &Value) -> Value {
    Value::Number(to_number(x) - 1.0)
}

fn int32(x: &Value) -> i32 {
    to_int32(to_number(x))
}

fn shift_count(y: &Value) -> u32 {
    to_uint32(to_number(y)) & 31
}

/// `x & y`
pub fn bit_and(x: &Value, y: &Value) -> Value {
    Value::Number(f64::from(int32(x) & int32(y)))
}

/// `x | y`
pub fn bit_or(x: &Value, y: &Value) -> Value {
    Value::Number(f64::from(int32(x) | int32(y)))
}

/// `x ^ y`
pub fn bit_xor(x: &Value, y: &Value) -> Value {
    Value::Number(f64::from(int32(x) ^ int32(y)))
}

/// `~x`
pub fn bit_not(x: &Value) -> Value {
    Value::Number(f64::from(!int32(x)))
}

/// `x << y`
pub fn shl(x: &Value, y: &Value) -> Value {
    Value::Number(f64::from(int32(x).wrapping_shl(shift_count(y))))
}

/// `x >> y`, sign-propagating
pub fn shr(x: &Value, y: &Value) -> Value {
    Value::Number(f64::from(int32(x) >> shift_count(y)))
}

/// `x >>> y`, zero-filling
pub fn ushr(x: &Value, y: &Value) -> Value {
    Value::Number(f64::from(to_uint32(to_number(x)) >> shift_count(y)))
}
