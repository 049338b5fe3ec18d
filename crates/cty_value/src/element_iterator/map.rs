use std::fmt;

use cty_types::Type;
use rustc_hash::FxHashMap;

use super::position::Position;
use super::ElementCursor;
use crate::native::Native;
use crate::value::Value;

/// Iterator over a map's entries, keyed by string in lexicographic order.
///
/// The backing hash map has no meaningful order, so entries are collected
/// and sorted by key once, at construction. Only references are collected.
pub struct MapElements<'a> {
    ety: &'a Type,
    entries: Vec<(&'a str, &'a Native)>,
    pos: Position,
}

impl<'a> MapElements<'a> {
    pub(super) fn new(ety: &'a Type, map: &'a FxHashMap<String, Native>) -> Self {
        let mut entries: Vec<(&'a str, &'a Native)> =
            map.iter().map(|(k, v)| (k.as_str(), v)).collect();
        // Keys are unique, so an unstable sort is deterministic.
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        tracing::trace!(keys = entries.len(), "map keys sorted");

        let len = entries.len();
        MapElements {
            ety,
            entries,
            pos: Position::before_start(len),
        }
    }
}

impl ElementCursor for MapElements<'_> {
    #[inline]
    fn advance(&mut self) -> bool {
        self.pos.advance()
    }

    fn current(&self) -> (Value, Value) {
        let (key, elem) = self.entries[self.pos.index()];
        (
            Value::string(key),
            Value::from_raw(self.ety.clone(), elem.clone()),
        )
    }
}

impl fmt::Debug for MapElements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MapElements(consumed={}, len={})",
            self.pos.consumed(),
            self.pos.len()
        )
    }
}
