#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

use super::*;
use crate::heap::Heap;
use crate::native::{ValueSet, ValueSetRules};
use crate::number::Number;

fn num(n: i64) -> Value {
    Value::number_int(n)
}

fn drain(value: &Value) -> Vec<(Value, Value)> {
    let mut out = Vec::new();
    let mut it = value.element_iterator();
    while it.advance() {
        out.push(it.current());
    }
    out
}

// === List ===

#[test]
fn list_yields_index_keys_in_order() {
    let list = Value::list(Type::String, vec![Value::string("a"), Value::string("b")]).unwrap();
    assert_eq!(
        drain(&list),
        vec![(num(0), Value::string("a")), (num(1), Value::string("b"))]
    );
}

#[test]
fn list_exhaustion_is_terminal() {
    let list = Value::list(Type::Number, vec![num(1)]).unwrap();
    let mut it = list.element_iterator();
    assert!(it.advance());
    assert!(!it.advance());
    assert!(!it.advance());
    assert!(!it.advance());
}

#[test]
#[should_panic(expected = "read before advance")]
fn list_current_before_advance_panics() {
    let list = Value::list(Type::Number, vec![num(1)]).unwrap();
    let it = list.element_iterator();
    let _ = it.current();
}

#[test]
#[should_panic(expected = "after exhaustion")]
fn list_current_after_exhaustion_panics() {
    let list = Value::list(Type::Number, vec![num(1)]).unwrap();
    let mut it = list.element_iterator();
    while it.advance() {}
    let _ = it.current();
}

#[test]
fn list_elements_share_nested_payloads() {
    let inner = Value::list(Type::Number, vec![num(1), num(2)]).unwrap();
    let outer = Value::list(Type::list(Type::Number), vec![inner.clone()]).unwrap();

    let (_, elem) = outer.elements().next().unwrap();
    let (Native::List(a), Native::List(b)) = (elem.native(), inner.native()) else {
        panic!("expected list payloads");
    };
    assert!(Heap::ptr_eq(a, b));
    assert_eq!(elem.ty(), &Type::list(Type::Number));
}

// === Tuple ===

#[test]
fn tuple_uses_positional_types() {
    let tuple = Value::tuple(vec![Value::string("x"), num(2), Value::bool(true)]);
    let pairs = drain(&tuple);
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], (num(0), Value::string("x")));
    assert_eq!(pairs[1].1.ty(), &Type::Number);
    assert_eq!(pairs[2], (num(2), Value::bool(true)));
}

#[test]
fn tuple_arity_mismatch_is_reported() {
    let bad = Value::from_raw(
        Type::tuple(vec![Type::Number, Type::Number]),
        Native::Tuple(Heap::new(vec![Native::Number(Number::from_i64(1))])),
    );
    assert_eq!(
        bad.try_element_iterator().unwrap_err(),
        IterError::TupleArityMismatch {
            expected: 2,
            found: 1
        }
    );
}

// === Map ===

#[test]
fn map_yields_keys_lexicographically() {
    let map = Value::map(
        Type::Number,
        [
            ("b".to_string(), num(1)),
            ("a".to_string(), num(2)),
            ("B".to_string(), num(3)),
            ("aa".to_string(), num(4)),
        ],
    )
    .unwrap();
    let keys: Vec<String> = map
        .elements()
        .map(|(k, _)| k.as_str().unwrap().to_string())
        .collect();
    // Byte order: uppercase sorts before lowercase; prefixes first.
    assert_eq!(keys, vec!["B", "a", "aa", "b"]);
}

#[test]
fn map_pairs_keys_with_their_elements() {
    let map = Value::map(
        Type::Number,
        [("b".to_string(), num(1)), ("a".to_string(), num(2))],
    )
    .unwrap();
    assert_eq!(
        drain(&map),
        vec![
            (Value::string("a"), num(2)),
            (Value::string("b"), num(1)),
        ]
    );
}

#[test]
fn map_order_ignores_storage_order() {
    let mut forward = FxHashMap::default();
    let mut backward = FxHashMap::default();
    for i in 0..50 {
        forward.insert(format!("k{i}"), Native::Number(Number::from_i64(i)));
    }
    for i in (0..50).rev() {
        backward.insert(format!("k{i}"), Native::Number(Number::from_i64(i)));
    }
    let a = Value::from_raw(Type::map(Type::Number), Native::Map(Heap::new(forward)));
    let b = Value::from_raw(Type::map(Type::Number), Native::Map(Heap::new(backward)));
    assert_eq!(drain(&a), drain(&b));
}

// === Set ===

#[test]
fn set_member_is_key_and_element() {
    let set = Value::set(Type::Number, vec![num(1), num(2), num(2), num(3)]).unwrap();
    let pairs = drain(&set);
    assert_eq!(pairs.len(), 3);
    for (key, elem) in &pairs {
        assert_eq!(key, elem);
        assert_eq!(elem.ty(), &Type::Number);
    }
    let mut members: Vec<i64> = pairs
        .iter()
        .map(|(_, e)| e.as_number().and_then(Number::as_i64).unwrap())
        .collect();
    members.sort_unstable();
    assert_eq!(members, vec![1, 2, 3]);
}

#[test]
fn set_order_follows_set_cursor() {
    let raw = ValueSet::from_values(
        ValueSetRules,
        [3, 1, 2].map(|n| Native::Number(Number::from_i64(n))),
    );
    let expected: Vec<Native> = raw.iter().cloned().collect();
    let set = Value::from_raw(Type::set(Type::Number), Native::Set(Heap::new(raw)));
    let yielded: Vec<Native> = set.elements().map(|(_, e)| e.native().clone()).collect();
    assert_eq!(yielded, expected);
}

// === Empty collections ===

#[test]
fn empty_collections_are_immediately_exhausted() {
    for value in [
        Value::list_empty(Type::Number),
        Value::map_empty(Type::Number),
        Value::set_empty(Type::Number),
        Value::tuple(vec![]),
    ] {
        let mut it = value.element_iterator();
        assert!(!it.advance(), "{:?}", value.ty());
    }
}

// === Faults ===

#[test]
fn non_collections_are_not_iterable() {
    for value in [
        num(1),
        Value::string("s"),
        Value::bool(true),
        Value::object([("a".to_string(), num(1))]),
        Value::null(Type::DynamicPseudo),
    ] {
        assert_eq!(
            ElementIterator::new(&value).unwrap_err(),
            IterError::NotIterable {
                ty: value.ty().clone()
            }
        );
    }
}

#[test]
fn null_collection_is_reported() {
    let value = Value::null(Type::map(Type::String));
    assert_eq!(
        ElementIterator::new(&value).unwrap_err(),
        IterError::NullCollection {
            ty: Type::map(Type::String)
        }
    );
}

#[test]
fn representation_mismatch_is_reported() {
    let tuple_payload = Native::Tuple(Heap::new(vec![]));
    let value = Value::from_raw(Type::list(Type::Number), tuple_payload);
    let err = ElementIterator::new(&value).unwrap_err();
    assert_eq!(
        err,
        IterError::RepresentationMismatch {
            ty: Type::list(Type::Number),
            found: "tuple",
        }
    );
    assert_eq!(err.to_string(), "list of number value carries a tuple payload");
}

// === Debug ===

#[test]
fn debug_shows_progress() {
    let list = Value::list(Type::Number, vec![num(1), num(2)]).unwrap();
    let mut it = list.element_iterator();
    assert_eq!(format!("{it:?}"), "ListElements(consumed=0, len=2)");
    it.advance();
    assert_eq!(format!("{it:?}"), "ListElements(consumed=1, len=2)");
    it.advance();
    it.advance();
    assert_eq!(format!("{it:?}"), "ListElements(consumed=2, len=2)");

    let set = Value::set(Type::Number, vec![num(1)]).unwrap();
    assert_eq!(format!("{:?}", set.element_iterator()), "SetElements(len=1)");
}
