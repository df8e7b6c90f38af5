//! Unit tests for the property store

use std::cell::RefCell;
use std::rc::Rc;

use core_types::object::{hash_key, BUCKET_COUNT};
use core_types::{FunctionRef, ObjectRef, Value};

#[cfg(test)]
mod prototype_chain_tests {
    use super::*;

    #[test]
    fn test_lookup_falls_through_to_prototype() {
        let base = ObjectRef::create(None, [("inherited", Value::number(1.0))]);
        let derived = ObjectRef::new(Some(base.clone()));
        assert_eq!(derived.get("inherited"), Some(Value::number(1.0)));
        assert_eq!(derived.get_own("inherited"), None);
    }

    #[test]
    fn test_own_property_shadows_prototype() {
        let base = ObjectRef::create(None, [("name", Value::string("base"))]);
        let derived = ObjectRef::create(Some(&base), [("name", Value::string("derived"))]);
        assert_eq!(derived.get("name"), Some(Value::string("derived")));
        assert_eq!(base.get("name"), Some(Value::string("base")));
    }

    #[test]
    fn test_three_level_chain() {
        let root = ObjectRef::create(None, [("depth", Value::number(0.0))]);
        let middle = ObjectRef::new(Some(root));
        let leaf = ObjectRef::new(Some(middle.clone()));
        assert_eq!(leaf.get("depth"), Some(Value::number(0.0)));
        assert!(leaf.prototype().unwrap().ptr_eq(&middle));
    }

    #[test]
    fn test_set_never_writes_to_prototype() {
        let base = ObjectRef::create(None, [("x", Value::number(1.0))]);
        let derived = ObjectRef::new(Some(base.clone()));
        derived.set("x", Value::number(2.0));
        assert_eq!(base.get("x"), Some(Value::number(1.0)));
        assert!(derived.has("x"));
    }

    #[test]
    fn test_missing_everywhere() {
        let base = ObjectRef::default();
        let derived = ObjectRef::new(Some(base));
        assert_eq!(derived.get("nope"), None);
    }

    #[test]
    fn test_inherited_getter_receives_owner() {
        let seen: Rc<RefCell<Option<Value>>> = Rc::new(RefCell::new(None));
        let record = seen.clone();
        let base = ObjectRef::default();
        base.set_accessor(
            "who",
            FunctionRef::new("get who", move |this, _| {
                *record.borrow_mut() = Some(this.clone());
                Value::Undefined
            }),
            None,
        );
        let derived = ObjectRef::new(Some(base.clone()));
        derived.get("who");
        assert_eq!(*seen.borrow(), Some(Value::object(base)));
    }
}

#[cfg(test)]
mod bucket_tests {
    use super::*;

    #[test]
    fn test_hash_is_byte_sum_mod_buckets() {
        assert_eq!(BUCKET_COUNT, 16);
        assert_eq!(hash_key("abc"), (97 + 98 + 99) % 16);
        assert!(hash_key("a much longer property name") < BUCKET_COUNT);
    }

    #[test]
    fn test_colliding_keys_stay_distinct() {
        // byte sums of "ab" and "ba" are equal
        let obj = ObjectRef::create(None, [("ab", Value::number(1.0)), ("ba", Value::number(2.0))]);
        assert_eq!(obj.get("ab"), Some(Value::number(1.0)));
        assert_eq!(obj.get("ba"), Some(Value::number(2.0)));
        assert_eq!(obj.keys(), vec!["ab", "ba"]);
    }

    #[test]
    fn test_reinsert_after_delete_goes_to_end_of_bucket() {
        let obj = ObjectRef::create(None, [("ab", Value::Null), ("ba", Value::Null)]);
        obj.delete("ab");
        obj.set("ab", Value::Null);
        assert_eq!(obj.keys(), vec!["ba", "ab"]);
    }

    #[test]
    fn test_empty_string_key() {
        let obj = ObjectRef::default();
        obj.set("", Value::number(0.0));
        assert_eq!(obj.get(""), Some(Value::number(0.0)));
        assert!(!obj.is_empty());
    }
}

#[cfg(test)]
mod accessor_tests {
    use super::*;

    #[test]
    fn test_setter_receives_value() {
        let store = ObjectRef::default();
        let target = store.clone();
        let obj = ObjectRef::default();
        obj.set_accessor(
            "v",
            FunctionRef::new("get v", |_, _| Value::Undefined),
            Some(FunctionRef::new("set v", move |_, args| {
                target.set("written", args[0].clone());
                Value::Undefined
            })),
        );
        obj.set("v", Value::string("payload"));
        assert_eq!(store.get("written"), Some(Value::string("payload")));
    }

    #[test]
    fn test_setter_may_write_other_keys_on_owner() {
        let obj = ObjectRef::default();
        obj.set_accessor(
            "celsius",
            FunctionRef::new("get celsius", |this, _| match this.as_object().and_then(|o| o.get("_c")) {
                Some(v) => v,
                None => Value::Undefined,
            }),
            Some(FunctionRef::new("set celsius", |this, args| {
                if let Some(owner) = this.as_object() {
                    owner.set("_c", args[0].clone());
                }
                Value::Undefined
            })),
        );
        obj.set("celsius", Value::number(21.0));
        assert_eq!(obj.get("celsius"), Some(Value::number(21.0)));
        assert_eq!(obj.get("_c"), Some(Value::number(21.0)));
    }

    #[test]
    fn test_symbol_keyed_accessor() {
        let key = core_types::SymbolId::from_raw(99);
        let obj = ObjectRef::default();
        obj.set_accessor(key, FunctionRef::new("get", |_, _| Value::boolean(true)), None);
        assert_eq!(obj.get(key), Some(Value::boolean(true)));
        assert!(obj.keys().is_empty());
        assert_eq!(obj.symbol_keys(), vec![key]);
    }

    #[test]
    fn test_len_counts_symbol_keys() {
        let key = core_types::SymbolId::from_raw(99);
        let obj = ObjectRef::default();
        obj.set(key, Value::number(1.0));
        assert_eq!(obj.len(), 1);
        assert!(!obj.is_empty());

        obj.set("a", Value::Null);
        assert_eq!(obj.len(), 2);
        assert!(obj.delete(key));
        assert_eq!(obj.len(), 1);
    }
}
