use std::fmt;

use cty_types::Type;

use super::ElementCursor;
use crate::native::{Native, ValueSet};
use crate::value::Value;

/// Iterator over a set's members.
///
/// Ordering and deduplication belong to the set itself; this only attaches
/// the element type. Each member is both key and element.
pub struct SetElements<'a> {
    ety: &'a Type,
    cursor: cty_set::Iter<'a, Native>,
    len: usize,
}

impl<'a> SetElements<'a> {
    pub(super) fn new(ety: &'a Type, set: &'a ValueSet) -> Self {
        SetElements {
            ety,
            cursor: set.iter(),
            len: set.len(),
        }
    }
}

impl ElementCursor for SetElements<'_> {
    #[inline]
    fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    fn current(&self) -> (Value, Value) {
        let elem = Value::from_raw(self.ety.clone(), self.cursor.current().clone());
        (elem.clone(), elem)
    }
}

impl fmt::Debug for SetElements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetElements(len={})", self.len)
    }
}
