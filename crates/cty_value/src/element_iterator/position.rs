//! Forward-only index cursor shared by the indexed iterators.

/// Position within a sequence of `len` elements.
///
/// `advanced` counts successful and failed `advance` calls, saturating one
/// past the end so exhaustion is terminal.
#[derive(Clone, Copy)]
pub(super) struct Position {
    advanced: usize,
    len: usize,
}

impl Position {
    pub(super) fn before_start(len: usize) -> Self {
        Position { advanced: 0, len }
    }

    pub(super) fn advance(&mut self) -> bool {
        if self.advanced <= self.len {
            self.advanced += 1;
        }
        self.advanced <= self.len
    }

    /// Index of the current element.
    ///
    /// # Panics
    ///
    /// Panics unless the last `advance` returned `true`.
    pub(super) fn index(self) -> usize {
        match self.advanced.checked_sub(1) {
            Some(idx) if idx < self.len => idx,
            _ => panic!("element iterator read before advance or after exhaustion"),
        }
    }

    pub(super) fn len(self) -> usize {
        self.len
    }

    /// Number of elements yielded so far.
    pub(super) fn consumed(self) -> usize {
        self.advanced.min(self.len)
    }
}
