//! Numeric payload.

use std::fmt;
use std::hash::{Hash, Hasher};

/// 2^63, the first float outside the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Number payload backed by `f64`.
///
/// Equality and hashing are canonical: `-0.0` equals `0.0`, and every NaN
/// equals every other NaN, so numbers behave as set members and map
/// values without surprises.
#[derive(Copy, Clone, Debug)]
pub struct Number(f64);

impl Number {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Number(value)
    }

    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are f64; integers beyond 2^53 round like any other literal"
    )]
    pub fn from_i64(value: i64) -> Self {
        Number(value as f64)
    }

    /// Number for a zero-based element index.
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "collection indices stay far below 2^53"
    )]
    pub fn from_index(index: usize) -> Self {
        Number(index as f64)
    }

    #[inline]
    pub const fn as_f64(self) -> f64 {
        self.0
    }

    /// Get the value as an `i64` if it is an integer in range.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "guarded: value is integral and within the i64 range"
    )]
    pub fn as_i64(self) -> Option<i64> {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v >= -I64_BOUND && v < I64_BOUND {
            Some(v as i64)
        } else {
            None
        }
    }

    fn canonical_bits(self) -> u64 {
        if self.0 == 0.0 {
            0
        } else if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_i64() {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "{}", self.0),
        }
    }
}
