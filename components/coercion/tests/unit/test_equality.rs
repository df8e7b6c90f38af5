//! Unit tests for equality operators across every tag pair

use coercion::ops::{eq, same_value_zero, seq};
use core_types::{ObjectRef, SymbolId, Value};

fn one_of_each() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::boolean(true),
        Value::number(1.0),
        Value::string("1"),
        Value::symbol(SymbolId::ITERATOR),
        Value::Object(ObjectRef::default()),
        Value::array_from(vec![Value::number(1.0)]),
        Value::function("f", |_, _| Value::Undefined),
    ]
}

#[test]
fn test_seq_is_diagonal() {
    let values = one_of_each();
    for (i, x) in values.iter().enumerate() {
        for (j, y) in values.iter().enumerate() {
            assert_eq!(seq(x, y), i == j, "seq({:?}, {:?})", x, y);
            assert_eq!(same_value_zero(x, y), i == j, "svz({:?}, {:?})", x, y);
        }
    }
}

#[test]
fn test_eq_is_symmetric() {
    let values = one_of_each();
    for x in &values {
        for y in &values {
            assert_eq!(eq(x, y), eq(y, x), "eq({:?}, {:?})", x, y);
        }
    }
}

#[test]
fn test_eq_matrix_for_true_one_and_array() {
    let values = one_of_each();
    // true, 1, "1" and [1] are all loosely equal to each other
    for x in &values[2..5] {
        for y in &values[2..5] {
            assert!(eq(x, y), "eq({:?}, {:?})", x, y);
        }
        assert!(eq(x, &values[7]), "eq({:?}, [1])", x);
    }
    assert!(!eq(&values[0], &values[3]));
    assert!(!eq(&values[5], &values[4]));
    assert!(!eq(&values[6], &values[8]));
}

#[test]
fn test_eq_reflexive_except_nan() {
    for value in one_of_each() {
        assert!(eq(&value, &value), "{:?}", value);
    }
    let nan = Value::number(f64::NAN);
    assert!(!eq(&nan, &nan));
}

#[test]
fn test_function_compares_by_source_against_strings() {
    let f = Value::function("go", |_, _| Value::Undefined);
    assert!(eq(&f, &Value::string("function go() { [native code] }")));
    assert!(!seq(&f, &Value::string("function go() { [native code] }")));
}
