//! JavaScript Symbol identities and the per-realm symbol table.
//!
//! Symbols are plain ids; their descriptions and the `Symbol.for` registry
//! live in a [`SymbolTable`] owned by the runtime instance. Every table
//! reserves the same ids for the well-known symbols, so code that only needs
//! `Symbol.toPrimitive` can use [`SymbolId::TO_PRIMITIVE`] without a table.

use std::collections::HashMap;
use std::fmt;

/// Descriptions of the well-known symbols, indexed by their reserved id.
const WELL_KNOWN: [&str; 13] = [
    "Symbol.asyncIterator",
    "Symbol.hasInstance",
    "Symbol.isConcatSpreadable",
    "Symbol.iterator",
    "Symbol.match",
    "Symbol.matchAll",
    "Symbol.replace",
    "Symbol.search",
    "Symbol.species",
    "Symbol.split",
    "Symbol.toPrimitive",
    "Symbol.toStringTag",
    "Symbol.unscopables",
];

/// The identity of a JavaScript symbol.
///
/// Two symbols are the same symbol iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u64);

impl SymbolId {
    /// `Symbol.asyncIterator`
    pub const ASYNC_ITERATOR: SymbolId = SymbolId(0);
    /// `Symbol.hasInstance`
    pub const HAS_INSTANCE: SymbolId = SymbolId(1);
    /// `Symbol.isConcatSpreadable`
    pub const IS_CONCAT_SPREADABLE: SymbolId = SymbolId(2);
    /// `Symbol.iterator`
    pub const ITERATOR: SymbolId = SymbolId(3);
    /// `Symbol.match`
    pub const MATCH: SymbolId = SymbolId(4);
    /// `Symbol.matchAll`
    pub const MATCH_ALL: SymbolId = SymbolId(5);
    /// `Symbol.replace`
    pub const REPLACE: SymbolId = SymbolId(6);
    /// `Symbol.search`
    pub const SEARCH: SymbolId = SymbolId(7);
    /// `Symbol.species`
    pub const SPECIES: SymbolId = SymbolId(8);
    /// `Symbol.split`
    pub const SPLIT: SymbolId = SymbolId(9);
    /// `Symbol.toPrimitive`
    pub const TO_PRIMITIVE: SymbolId = SymbolId(10);
    /// `Symbol.toStringTag`
    pub const TO_STRING_TAG: SymbolId = SymbolId(11);
    /// `Symbol.unscopables`
    pub const UNSCOPABLES: SymbolId = SymbolId(12);

    /// Wrap a raw id handed out by some [`SymbolTable`].
    pub const fn from_raw(id: u64) -> Self {
        SymbolId(id)
    }

    /// Get the raw id of this symbol
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Whether this id is one of the reserved well-known symbols
    pub fn is_well_known(self) -> bool {
        (self.0 as usize) < WELL_KNOWN.len()
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match WELL_KNOWN.get(self.0 as usize) {
            Some(name) => f.write_str(name),
            None => write!(f, "Symbol(#{})", self.0),
        }
    }
}

/// Allocator and registry for symbols.
///
/// # Examples
///
/// ```
/// use core_types::{SymbolId, SymbolTable};
///
/// let mut symbols = SymbolTable::new();
/// let a = symbols.create(Some("a"));
/// let b = symbols.create(Some("a"));
///
/// assert_ne!(a, b);
/// assert_eq!(symbols.description(a), Some("a"));
/// assert_eq!(symbols.description(SymbolId::TO_PRIMITIVE), Some("Symbol.toPrimitive"));
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    descriptions: Vec<Option<String>>,
    registry: HashMap<String, SymbolId>,
}

impl SymbolTable {
    /// Create a table holding only the well-known symbols.
    pub fn new() -> Self {
        SymbolTable {
            descriptions: WELL_KNOWN.iter().map(|name| Some(name.to_string())).collect(),
            registry: HashMap::new(),
        }
    }

    /// Allocate a fresh, unique symbol.
    pub fn create(&mut self, description: Option<&str>) -> SymbolId {
        let id = SymbolId(self.descriptions.len() as u64);
        self.descriptions.push(description.map(str::to_string));
        id
    }

    /// Description given when the symbol was created.
    pub fn description(&self, id: SymbolId) -> Option<&str> {
        self.descriptions.get(id.0 as usize)?.as_deref()
    }

    /// `Symbol.for(key)`: return the registered symbol for `key`, creating it
    /// on first use.
    pub fn symbol_for(&mut self, key: &str) -> SymbolId {
        if let Some(id) = self.registry.get(key) {
            return *id;
        }
        let id = self.create(Some(key));
        self.registry.insert(key.to_string(), id);
        id
    }

    /// `Symbol.keyFor(sym)`: the registry key of a registered symbol.
    pub fn key_for(&self, id: SymbolId) -> Option<&str> {
        self.registry
            .iter()
            .find(|(_, registered)| **registered == id)
            .map(|(key, _)| key.as_str())
    }

    /// Whether `id` was handed out by this table
    pub fn contains(&self, id: SymbolId) -> bool {
        (id.0 as usize) < self.descriptions.len()
    }

    /// Number of symbols allocated so far, well-known ones included
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Always false: the well-known symbols are present from the start
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    /// `Symbol.prototype.toString`: `Symbol(description)`.
    pub fn display(&self, id: SymbolId) -> String {
        format!("Symbol({})", self.description(id).unwrap_or(""))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
