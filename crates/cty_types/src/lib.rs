//! Structural type descriptors for dynamically typed values.
//!
//! A `Type` describes the shape of a runtime value: a primitive, one of the
//! three homogeneous collections (list, map, set), a tuple with one type per
//! position, or an object with one type per attribute.
//!
//! # Collections vs. Structural Types
//!
//! - List, map and set types carry a single element type shared by every
//!   element.
//! - Tuple and object types carry per-position / per-attribute types and
//!   may be heterogeneous.
//!
//! Type equality is structural: two independently built `list of number`
//! types are equal.

mod ty;

pub use ty::{Type, TypeKind};
