//! Operator dispatch over pairs of values.
//!
//! Each operator is a total function of its operands: invalid combinations
//! produce `NaN` or `false` instead of an error.

mod additive;
mod arithmetic;
mod equality;
mod logical;
mod relational;

pub use additive::add;
pub use arithmetic::{
    bit_and, bit_not, bit_or, bit_xor, dec, div, inc, mul, neg, plus, pow, rem, shl, shr, sub,
    ushr,
};
pub use equality::{eq, ne, same_value_zero, seq, sne};
pub use logical::{and, nc, not, or};
pub use relational::{gt, gte, lt, lte};

use core_types::Value;

/// The `typeof` operator
pub fn type_of(value: &Value) -> &'static str {
    value.type_of()
}
