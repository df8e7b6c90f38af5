//! Type coercion and operator semantics for JavaScript values.
//!
//! Built on [`core_types`], this crate implements the conversions
//! (ToPrimitive, ToNumber, ToString, ToBoolean), number formatting and
//! parsing, and the operators that combine two values.
//!
//! All conversions and operators are total: they return a value for every
//! input, using `NaN` or `false` where an operation makes no sense.
//!
//! # Examples
//!
//! ```
//! use coercion::ops::{add, eq, seq};
//! use coercion::to_js_string;
//! use core_types::{ObjectRef, Value};
//!
//! let base = ObjectRef::create(
//!     None,
//!     [("toString", Value::function("toString", |_, _| Value::string("B")))],
//! );
//! let derived = Value::Object(ObjectRef::new(Some(base)));
//!
//! assert_eq!(to_js_string(&derived), "B");
//! assert_eq!(add(&derived, &Value::number(1.0)), Value::string("B1"));
//! assert!(eq(&Value::number(1.0), &Value::string("1")));
//! assert!(!seq(&Value::number(1.0), &Value::string("1")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod convert;
pub mod number;
pub mod ops;

pub use convert::{
    array_to_string, function_source, to_boolean, to_js_string, to_number, to_primitive,
    PreferredType,
};
pub use number::{format_number, number_to_string, parse_number, to_int32, to_uint32, Radix};
