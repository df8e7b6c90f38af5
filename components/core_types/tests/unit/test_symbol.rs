//! Unit tests for symbols and the symbol table

use core_types::{ObjectRef, SymbolId, SymbolTable, Value};

#[test]
fn test_every_well_known_symbol_is_described() {
    let symbols = SymbolTable::new();
    let expected = [
        (SymbolId::ASYNC_ITERATOR, "Symbol.asyncIterator"),
        (SymbolId::HAS_INSTANCE, "Symbol.hasInstance"),
        (SymbolId::IS_CONCAT_SPREADABLE, "Symbol.isConcatSpreadable"),
        (SymbolId::ITERATOR, "Symbol.iterator"),
        (SymbolId::MATCH, "Symbol.match"),
        (SymbolId::MATCH_ALL, "Symbol.matchAll"),
        (SymbolId::REPLACE, "Symbol.replace"),
        (SymbolId::SEARCH, "Symbol.search"),
        (SymbolId::SPECIES, "Symbol.species"),
        (SymbolId::SPLIT, "Symbol.split"),
        (SymbolId::TO_PRIMITIVE, "Symbol.toPrimitive"),
        (SymbolId::TO_STRING_TAG, "Symbol.toStringTag"),
        (SymbolId::UNSCOPABLES, "Symbol.unscopables"),
    ];
    for (id, name) in expected {
        assert_eq!(symbols.description(id), Some(name));
        assert!(symbols.contains(id));
    }
}

#[test]
fn test_created_symbols_are_unique() {
    let mut symbols = SymbolTable::new();
    let ids: Vec<SymbolId> = (0..50).map(|_| symbols.create(Some("same"))).collect();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(!symbols.is_empty());
}

#[test]
fn test_unknown_id_is_not_contained() {
    let symbols = SymbolTable::new();
    let foreign = SymbolId::from_raw(1_000);
    assert!(!symbols.contains(foreign));
    assert_eq!(symbols.description(foreign), None);
    assert_eq!(foreign.to_string(), "Symbol(#1000)");
}

#[test]
fn test_symbol_as_property_key_is_not_its_description() {
    let mut symbols = SymbolTable::new();
    let tag = symbols.create(Some("tag"));
    let obj = ObjectRef::default();
    obj.set(tag, Value::number(1.0));
    assert_eq!(obj.get("tag"), None);
    assert_eq!(obj.get(tag), Some(Value::number(1.0)));
}
