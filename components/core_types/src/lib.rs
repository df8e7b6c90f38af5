//! Core JavaScript value types and the property store.
//!
//! This crate provides the foundational types for a JavaScript runtime:
//! the tagged value, symbols, native functions, arrays, and objects with
//! prototype-chained property lookup.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`ObjectRef`] - Hashed property store with accessors and a prototype
//! - [`SymbolTable`] - Per-realm symbol allocation and registry
//! - [`Realm`] - A runtime instance owning symbols and `Object.prototype`
//! - [`JsError`] - Errors raised at the host-facing boundary
//!
//! # Examples
//!
//! ```
//! use core_types::{Realm, Value};
//!
//! let realm = Realm::new();
//! let base = realm.new_object([("kind", Value::string("base"))]);
//! let derived = core_types::ObjectRef::new(Some(base.clone()));
//!
//! assert_eq!(derived.get("kind"), Some(Value::string("base")));
//! assert_eq!(Value::Object(derived).type_of(), "object");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod array;
mod error;
mod function;
pub mod object;
mod realm;
mod symbol;
mod value;

pub use array::ArrayRef;
pub use error::{ErrorKind, JsError, JsResult};
pub use function::FunctionRef;
pub use object::{ObjectRef, PropertyKey, Slot};
pub use realm::{Realm, RealmConfig};
pub use symbol::{SymbolId, SymbolTable};
pub use value::{Value, ValueType};
