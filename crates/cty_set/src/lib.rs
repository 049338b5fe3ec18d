//! Equality-aware set with a canonical iteration order.
//!
//! A `Set` does not rely on `Eq`/`Hash` of its elements. Instead, each set
//! carries a `Rules` value that decides how elements hash and when two
//! elements are the same member. This lets callers define membership over
//! values whose native equality is not the one they want (for example,
//! numbers where `-0.0` and `0.0` must collapse).
//!
//! # Iteration Order
//!
//! Members are stored in buckets keyed by their rule hash. Iteration visits
//! buckets in ascending hash order, and members within a bucket in the order
//! they were inserted. The order therefore depends only on the set's
//! contents (plus insertion order among hash collisions), never on
//! allocation or storage incidentals.

mod rules;
mod set;

pub use rules::Rules;
pub use set::{Iter, Set};
