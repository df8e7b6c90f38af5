//! `<`, `>`, `<=` and `>=`.
//!
//! Both operands are converted with ToNumber and compared as IEEE doubles,
//! so every comparison involving `NaN` is false.

use std::cmp::Ordering;

use core_types::Value;

use crate::convert::to_number;

fn compare(x: &Value, y: &Value) -> Option<Ordering> {
    to_number(x).partial_cmp(&to_number(y))
}

/// `x < y`
pub fn lt(x: &Value, y: &Value) -> bool {
    matches!(compare(x, y), Some(Ordering::Less))
}

/// `x > y`
pub fn gt(x: &Value, y: &Value) -> bool {
    matches!(compare(x, y), Some(Ordering::Greater))
}

/// `x <= y`
pub fn lte(x: &Value, y: &Value) -> bool {
    matches!(compare(x, y), Some(Ordering::Less | Ordering::Equal))
}

/// `x >= y`
pub fn gte(x: &Value, y: &Value) -> bool {
    matches!(compare(x, y), Some(Ordering::Greater | Ordering::Equal))
}
