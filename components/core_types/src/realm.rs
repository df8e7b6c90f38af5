//! A runtime instance: its symbols and its intrinsic `Object.prototype`.
//!
//! Several realms can coexist; none of them share symbol allocation or
//! intrinsics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::object::ObjectRef;
use crate::symbol::{SymbolId, SymbolTable};
use crate::value::Value;

/// Options for building a [`Realm`].
///
/// # Examples
///
/// ```
/// use core_types::{Realm, RealmConfig};
///
/// let realm = Realm::with_config(RealmConfig::new().with_object_prototype(false));
/// let obj = realm.new_object([("x", core_types::Value::number(1.0))]);
///
/// assert!(obj.prototype().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmConfig {
    /// Link objects made by [`Realm::new_object`] to `Object.prototype`
    pub object_prototype: bool,
    /// Share symbols through the `Symbol.for` registry
    pub symbol_registry: bool,
}

impl RealmConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether new objects inherit from `Object.prototype`
    pub fn with_object_prototype(mut self, enabled: bool) -> Self {
        self.object_prototype = enabled;
        self
    }

    /// Set whether `Symbol.for` consults the registry
    pub fn with_symbol_registry(mut self, enabled: bool) -> Self {
        self.symbol_registry = enabled;
        self
    }
}

impl Default for RealmConfig {
    fn default() -> Self {
        RealmConfig {
            object_prototype: true,
            symbol_registry: true,
        }
    }
}

/// A runtime instance.
#[derive(Debug)]
pub struct Realm {
    config: RealmConfig,
    symbols: SymbolTable,
    object_prototype: ObjectRef,
}

impl Realm {
    /// Create a realm with the default configuration
    pub fn new() -> Self {
        Self::with_config(RealmConfig::default())
    }

    /// Create a realm with the given configuration
    pub fn with_config(config: RealmConfig) -> Self {
        debug!(
            object_prototype = config.object_prototype,
            symbol_registry = config.symbol_registry,
            "creating realm"
        );
        Realm {
            config,
            symbols: SymbolTable::new(),
            object_prototype: intrinsic_object_prototype(),
        }
    }

    /// The configuration this realm was built with
    pub fn config(&self) -> &RealmConfig {
        &self.config
    }

    /// The intrinsic `Object.prototype`
    pub fn object_prototype(&self) -> &ObjectRef {
        &self.object_prototype
    }

    /// Create an object with the realm's default prototype and the given
    /// string-keyed data properties.
    pub fn new_object<I, K>(&self, pairs: I) -> ObjectRef
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let prototype = self.config.object_prototype.then_some(&self.object_prototype);
        ObjectRef::create(prototype, pairs)
    }

    /// The realm's symbol table
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// `Symbol(description)`
    pub fn create_symbol(&mut self, description: Option<&str>) -> SymbolId {
        self.symbols.create(description)
    }

    /// `Symbol.for(key)`; a fresh symbol every time when the registry is
    /// disabled.
    pub fn symbol_for(&mut self, key: &str) -> SymbolId {
        if self.config.symbol_registry {
            self.symbols.symbol_for(key)
        } else {
            self.symbols.create(Some(key))
        }
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

fn intrinsic_object_prototype() -> ObjectRef {
    ObjectRef::create(
        None,
        [
            (
                "toString",
                Value::function("toString", |_this, _args| Value::string("[object Object]")),
            ),
            (
                "valueOf",
                Value::function("valueOf", |this, _args| this.clone()),
            ),
            (
                "hasOwnProperty",
                Value::function("hasOwnProperty", |this, args| {
                    let owned = match (this, args.first()) {
                        (Value::Object(obj), Some(Value::String(key))) => obj.has(key.as_str()),
                        (Value::Object(obj), Some(Value::Symbol(id))) => obj.has(*id),
                        _ => false,
                    };
                    Value::boolean(owned)
                }),
            ),
        ],
    )
}
