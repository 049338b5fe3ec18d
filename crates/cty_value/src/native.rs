//! Native payloads carried by values.
//!
//! A `Native` is the untyped half of a `Value`. Its shape must match the
//! value's `Type` tag; `Value`'s factory methods guarantee this, while
//! `Value::from_raw` leaves it to the caller.

use std::hash::{BuildHasher, Hash, Hasher};

use cty_set::{Rules, Set};
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::heap::Heap;
use crate::number::Number;

/// Set of native payloads, deduplicated by structural equality.
pub type ValueSet = Set<Native, ValueSetRules>;

/// Untyped runtime payload.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Native {
    /// Absent value of any type.
    Null,
    Number(Number),
    String(Heap<String>),
    Bool(bool),
    /// Elements in index order.
    List(Heap<Vec<Native>>),
    /// Unordered string-keyed entries.
    Map(Heap<FxHashMap<String, Native>>),
    Set(Heap<ValueSet>),
    /// Elements in position order.
    Tuple(Heap<Vec<Native>>),
    /// Attribute payloads by name.
    Object(Heap<FxHashMap<String, Native>>),
}

impl Native {
    /// Name of the payload's shape for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Native::Null => "null",
            Native::Number(_) => "number",
            Native::String(_) => "string",
            Native::Bool(_) => "bool",
            Native::List(_) => "list",
            Native::Map(_) => "map",
            Native::Set(_) => "set",
            Native::Tuple(_) => "tuple",
            Native::Object(_) => "object",
        }
    }
}

impl Hash for Native {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Native::Null => {}
            Native::Number(n) => n.hash(state),
            Native::String(s) => s.hash(state),
            Native::Bool(b) => b.hash(state),
            Native::List(items) | Native::Tuple(items) => items.hash(state),
            Native::Map(entries) | Native::Object(entries) => {
                // Storage order is arbitrary; hash entries in key order.
                let mut sorted: Vec<(&String, &Native)> = entries.iter().collect();
                sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
                sorted.len().hash(state);
                for (key, val) in sorted {
                    key.hash(state);
                    val.hash(state);
                }
            }
            Native::Set(set) => {
                // Equal sets may order colliding members differently, so
                // combine member hashes commutatively.
                let combined = set
                    .iter()
                    .fold(0u64, |acc, member| acc.wrapping_add(fx_hash(member)));
                set.len().hash(state);
                combined.hash(state);
            }
        }
    }
}

/// Membership rules for `ValueSet`: structural hashing and equality.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ValueSetRules;

impl Rules<Native> for ValueSetRules {
    fn hash(&self, val: &Native) -> u64 {
        fx_hash(val)
    }

    fn equivalent(&self, a: &Native, b: &Native) -> bool {
        a == b
    }
}

fn fx_hash(val: &Native) -> u64 {
    FxBuildHasher.hash_one(val)
}

#[cfg(test)]
mod tests;
