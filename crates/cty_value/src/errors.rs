//! Errors raised while building values and element iterators.

use cty_types::Type;

/// Fault raised when a value cannot be iterated element by element.
///
/// Every variant is a caller bug or a broken construction invariant, never
/// a condition to recover from. `Value::element_iterator` turns these into
/// panics; `Value::try_element_iterator` hands them back for callers that
/// report faults themselves.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IterError {
    /// The value's type is not a list, map, set or tuple.
    #[error("cannot iterate elements of type {ty}")]
    NotIterable { ty: Type },

    /// The value has a collection type but is null.
    #[error("cannot iterate elements of a null value of type {ty}")]
    NullCollection { ty: Type },

    /// The native payload does not have the shape its type declares.
    #[error("{ty} value carries a {found} payload")]
    RepresentationMismatch { ty: Type, found: &'static str },

    /// A tuple payload whose length differs from its type's arity.
    #[error("tuple type has {expected} elements but its payload has {found}")]
    TupleArityMismatch { expected: usize, found: usize },
}

/// Error building a collection value from elements.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// An element's type differs from the collection's element type.
    #[error("{at}: expected element of type {expected}, found {found}")]
    ElementTypeMismatch {
        expected: Type,
        found: Type,
        /// Position of the offending element, e.g. `element 2` or `element "a"`.
        at: String,
    },
}
