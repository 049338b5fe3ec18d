use std::fmt;

use cty_types::Type;

use super::position::Position;
use super::ElementCursor;
use crate::native::Native;
use crate::value::Value;

/// Iterator over a list's elements, keyed by index.
pub struct ListElements<'a> {
    ety: &'a Type,
    items: &'a [Native],
    pos: Position,
}

impl<'a> ListElements<'a> {
    pub(super) fn new(ety: &'a Type, items: &'a [Native]) -> Self {
        ListElements {
            ety,
            items,
            pos: Position::before_start(items.len()),
        }
    }
}

impl ElementCursor for ListElements<'_> {
    #[inline]
    fn advance(&mut self) -> bool {
        self.pos.advance()
    }

    fn current(&self) -> (Value, Value) {
        let idx = self.pos.index();
        let key = Value::index(idx);
        let elem = Value::from_raw(self.ety.clone(), self.items[idx].clone());
        (key, elem)
    }
}

impl fmt::Debug for ListElements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListElements(consumed={}, len={})",
            self.pos.consumed(),
            self.pos.len()
        )
    }
}
