//! Contract tests for coercion
//!
//! Algebraic properties every conversion and operator must satisfy.

use coercion::ops::{add, eq, nc, same_value_zero, seq};
use coercion::{format_number, number_to_string, parse_number, to_boolean, to_int32, to_js_string};
use core_types::{ObjectRef, SymbolId, Value};
use proptest::prelude::*;

fn primitive_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<f64>().prop_map(Value::Number),
        ".{0,8}".prop_map(Value::String),
        (0u64..20).prop_map(|id| Value::Symbol(SymbolId::from_raw(id))),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => primitive_strategy(),
        1 => Just(Value::Object(ObjectRef::default())),
        1 => proptest::collection::vec(any::<i32>().prop_map(Value::from), 0..4)
            .prop_map(Value::array_from),
    ]
}

proptest! {
    #[test]
    fn integer_round_trip(n in -1_000_000i32..=1_000_000) {
        let text = number_to_string(f64::from(n), 10).unwrap();
        prop_assert_eq!(parse_number(&text), f64::from(n));
    }

    #[test]
    fn finite_round_trip(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let parsed = parse_number(&format_number(v));
        prop_assert!(parsed == v, "{} -> {} -> {}", v, format_number(v), parsed);
    }

    #[test]
    fn radix_integers_match_std(n in 0u32..=u32::MAX, radix in 2u32..=36) {
        let expected = {
            let mut digits = Vec::new();
            let mut rest = n;
            loop {
                digits.push(std::char::from_digit(rest % radix, radix).unwrap());
                rest /= radix;
                if rest == 0 {
                    break;
                }
            }
            digits.iter().rev().collect::<String>()
        };
        prop_assert_eq!(number_to_string(f64::from(n), radix).unwrap(), expected);
    }

    #[test]
    fn seq_reflexive_except_nan(v in value_strategy()) {
        let is_nan = matches!(v, Value::Number(n) if n.is_nan());
        prop_assert_eq!(seq(&v, &v), !is_nan);
        prop_assert!(same_value_zero(&v, &v));
    }

    #[test]
    fn seq_implies_eq(x in value_strategy(), y in value_strategy()) {
        if seq(&x, &y) {
            prop_assert!(eq(&x, &y));
        }
    }

    #[test]
    fn eq_symmetric(x in value_strategy(), y in value_strategy()) {
        prop_assert_eq!(eq(&x, &y), eq(&y, &x));
    }

    #[test]
    fn nc_keeps_defined_left(x in value_strategy(), y in value_strategy()) {
        let result = nc(&x, &y);
        if x.is_nullish() {
            prop_assert!(seq(&result, &y) || matches!(y, Value::Number(n) if n.is_nan()));
        } else {
            prop_assert!(seq(&result, &x) || matches!(x, Value::Number(n) if n.is_nan()));
        }
    }

    #[test]
    fn to_boolean_of_strings(s in ".{0,8}") {
        prop_assert_eq!(to_boolean(&Value::string(s.clone())), !s.is_empty());
    }

    #[test]
    fn to_boolean_of_references_is_true(v in value_strategy()) {
        if v.is_object_like() {
            prop_assert!(to_boolean(&v));
        }
    }

    #[test]
    fn string_addition_concatenates(a in ".{0,8}", v in value_strategy()) {
        let left = Value::string(a.clone());
        let expected = format!("{}{}", a, to_js_string(&v));
        prop_assert_eq!(add(&left, &v), Value::string(expected));
    }

    #[test]
    fn int32_is_identity_on_i32(n in any::<i32>()) {
        prop_assert_eq!(to_int32(f64::from(n)), n);
    }
}
