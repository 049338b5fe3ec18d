//! Dynamically typed values and uniform iteration over their elements.
//!
//! This crate provides:
//! - `Value`: an immutable pair of a `Type` and a `Native` payload
//! - Factory methods that check collection elements against their type
//! - `ElementIterator`: one pull protocol over lists, maps, sets and tuples
//!
//! # Iteration Order
//!
//! - Lists and tuples yield elements in index order, keyed by index.
//! - Maps yield entries in lexicographic key order, keyed by string.
//! - Sets yield members in the set's canonical order, keyed by the member.
//!
//! # Faults
//!
//! Iterating a non-collection, a null collection, or a value whose payload
//! does not match its type is a programming error. `Value::element_iterator`
//! panics; `Value::try_element_iterator` returns an `IterError` instead.

mod element_iterator;
mod errors;
mod heap;
mod native;
mod number;
mod value;

// Re-export the type descriptor for convenience
pub use cty_types::{Type, TypeKind};

pub use element_iterator::{
    ElementCursor, ElementIterator, Elements, ListElements, MapElements, SetElements,
    TupleElements,
};
pub use errors::{IterError, ValueError};
pub use heap::Heap;
pub use native::{Native, ValueSet, ValueSetRules};
pub use number::Number;
pub use value::Value;
