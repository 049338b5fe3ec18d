//! Uniform element iteration over collection-typed values.
//!
//! Lists, maps, sets and tuples are iterated through one pull protocol,
//! `ElementCursor`: call `advance()`, and while it returns `true`, read the
//! `(key, element)` pair with `current()`.
//!
//! ```text
//! let mut it = value.element_iterator();
//! while it.advance() {
//!     let (key, elem) = it.current();
//!     // ...
//! }
//! ```
//!
//! Keys depend on the collection kind:
//! - list / tuple: the zero-based index as a number, in storage order;
//! - map: the string key, in lexicographic key order;
//! - set: the element itself, in the set's canonical order.
//!
//! Iterators borrow the source value and are single-pass. Asking the value
//! for a fresh iterator always replays the same sequence.

mod list;
mod map;
mod position;
mod set;
mod tuple;

use std::fmt;

use cty_types::Type;

use crate::errors::IterError;
use crate::native::Native;
use crate::value::Value;

pub use list::ListElements;
pub use map::MapElements;
pub use set::SetElements;
pub use tuple::TupleElements;

/// Pull protocol shared by every element iterator.
pub trait ElementCursor {
    /// Move to the next element.
    ///
    /// Returns whether an element is available. Once this returns `false`
    /// it keeps returning `false`.
    fn advance(&mut self) -> bool;

    /// The `(key, element)` pair at the position last reached by `advance`.
    ///
    /// # Panics
    ///
    /// Panics if called before `advance` returned `true`, or after it
    /// returned `false`.
    fn current(&self) -> (Value, Value);
}

/// Element iterator for one of the four iterable kinds.
///
/// Uses enum dispatch instead of `Box<dyn ElementCursor>`: the set of
/// kinds is closed, and dispatch needs no allocation.
pub enum ElementIterator<'a> {
    List(ListElements<'a>),
    Map(MapElements<'a>),
    Set(SetElements<'a>),
    Tuple(TupleElements<'a>),
}

impl<'a> ElementIterator<'a> {
    /// Build the iterator matching `value`'s type.
    ///
    /// Fails if the type is not iterable, the value is null, or the payload
    /// does not have the shape the type declares.
    pub fn new(value: &'a Value) -> Result<Self, IterError> {
        let ty = value.ty();
        let native = value.native();

        if !value.can_iterate_elements() {
            return Err(IterError::NotIterable { ty: ty.clone() });
        }
        if value.is_null() {
            return Err(IterError::NullCollection { ty: ty.clone() });
        }

        let iter = match (ty, native) {
            (Type::List(ety), Native::List(items)) => {
                ElementIterator::List(ListElements::new(ety, items))
            }
            (Type::Map(ety), Native::Map(entries)) => {
                ElementIterator::Map(MapElements::new(ety, entries))
            }
            (Type::Set(ety), Native::Set(set)) => ElementIterator::Set(SetElements::new(ety, set)),
            (Type::Tuple(etys), Native::Tuple(items)) => {
                if etys.len() != items.len() {
                    return Err(IterError::TupleArityMismatch {
                        expected: etys.len(),
                        found: items.len(),
                    });
                }
                ElementIterator::Tuple(TupleElements::new(etys, items))
            }
            _ => {
                return Err(IterError::RepresentationMismatch {
                    ty: ty.clone(),
                    found: native.shape_name(),
                })
            }
        };

        tracing::trace!(kind = %ty.kind(), "element iterator created");
        Ok(iter)
    }
}

impl ElementCursor for ElementIterator<'_> {
    #[inline]
    fn advance(&mut self) -> bool {
        match self {
            ElementIterator::List(it) => it.advance(),
            ElementIterator::Map(it) => it.advance(),
            ElementIterator::Set(it) => it.advance(),
            ElementIterator::Tuple(it) => it.advance(),
        }
    }

    #[inline]
    fn current(&self) -> (Value, Value) {
        match self {
            ElementIterator::List(it) => it.current(),
            ElementIterator::Map(it) => it.current(),
            ElementIterator::Set(it) => it.current(),
            ElementIterator::Tuple(it) => it.current(),
        }
    }
}

impl fmt::Debug for ElementIterator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementIterator::List(it) => fmt::Debug::fmt(it, f),
            ElementIterator::Map(it) => fmt::Debug::fmt(it, f),
            ElementIterator::Set(it) => fmt::Debug::fmt(it, f),
            ElementIterator::Tuple(it) => fmt::Debug::fmt(it, f),
        }
    }
}

impl<'a> IntoIterator for ElementIterator<'a> {
    type Item = (Value, Value);
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Elements<'a> {
        Elements { iter: self }
    }
}

/// Adapter exposing an `ElementIterator` as a standard `Iterator`.
#[derive(Debug)]
pub struct Elements<'a> {
    iter: ElementIterator<'a>,
}

impl Iterator for Elements<'_> {
    type Item = (Value, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.advance().then(|| self.iter.current())
    }
}

#[cfg(test)]
mod tests;
