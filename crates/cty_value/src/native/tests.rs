use rustc_hash::FxHashMap;

use super::*;

fn num(n: i64) -> Native {
    Native::Number(Number::from_i64(n))
}

fn str_map(entries: &[(&str, i64)]) -> FxHashMap<String, Native> {
    entries.iter().map(|(k, v)| ((*k).to_string(), num(*v))).collect()
}

#[test]
fn shape_names() {
    assert_eq!(Native::Null.shape_name(), "null");
    assert_eq!(num(1).shape_name(), "number");
    assert_eq!(Native::List(Heap::new(vec![])).shape_name(), "list");
    assert_eq!(Native::Tuple(Heap::new(vec![])).shape_name(), "tuple");
}

#[test]
fn list_and_tuple_payloads_differ() {
    let items = vec![num(1)];
    assert_ne!(
        Native::List(Heap::new(items.clone())),
        Native::Tuple(Heap::new(items))
    );
}

#[test]
fn map_hash_ignores_insertion_order() {
    let mut forward = FxHashMap::default();
    forward.insert("a".to_string(), num(1));
    forward.insert("b".to_string(), num(2));
    let backward = str_map(&[("b", 2), ("a", 1)]);

    let a = Native::Map(Heap::new(forward));
    let b = Native::Map(Heap::new(backward));
    assert_eq!(a, b);
    assert_eq!(fx_hash(&a), fx_hash(&b));
}

#[test]
fn set_rules_deduplicate_structurally() {
    let set = ValueSet::from_values(ValueSetRules, [num(1), num(2), num(2), num(3)]);
    assert_eq!(set.len(), 3);
    assert!(set.has(&num(2)));
    assert!(!set.has(&num(4)));
}

#[test]
fn nested_sets_hash_consistently() {
    let a = Native::Set(Heap::new(ValueSet::from_values(
        ValueSetRules,
        [num(1), num(2)],
    )));
    let b = Native::Set(Heap::new(ValueSet::from_values(
        ValueSetRules,
        [num(2), num(1)],
    )));
    assert_eq!(a, b);
    assert_eq!(fx_hash(&a), fx_hash(&b));
}
