use std::fmt;

use cty_types::Type;

use super::position::Position;
use super::ElementCursor;
use crate::native::Native;
use crate::value::Value;

/// Iterator over a tuple's elements, keyed by position.
///
/// Unlike a list, each position carries its own element type.
pub struct TupleElements<'a> {
    etys: &'a [Type],
    items: &'a [Native],
    pos: Position,
}

impl<'a> TupleElements<'a> {
    /// `etys` and `items` have equal length; the factory checks this.
    pub(super) fn new(etys: &'a [Type], items: &'a [Native]) -> Self {
        TupleElements {
            etys,
            items,
            pos: Position::before_start(items.len()),
        }
    }
}

impl ElementCursor for TupleElements<'_> {
    #[inline]
    fn advance(&mut self) -> bool {
        self.pos.advance()
    }

    fn current(&self) -> (Value, Value) {
        let idx = self.pos.index();
        let key = Value::index(idx);
        let elem = Value::from_raw(self.etys[idx].clone(), self.items[idx].clone());
        (key, elem)
    }
}

impl fmt::Debug for TupleElements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TupleElements(consumed={}, len={})",
            self.pos.consumed(),
            self.pos.len()
        )
    }
}
