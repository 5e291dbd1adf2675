//! Integer axis ranges used to scale chart values.

use serde::{Deserialize, Serialize};

/// An inclusive `(min, max)` pair.
///
/// No ordering is enforced. An inverted range (`min > max`) has a negative
/// span and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisRange {
    /// Lower bound (inclusive)
    pub min: i32,
    /// Upper bound (inclusive)
    pub max: i32,
}

impl AxisRange {
    /// Raw mood scale, 1..=10.
    pub const RAW: Self = Self::new(1, 10);
    /// Symmetric range for start-to-end impact, -9..=9.
    pub const IMPACT: Self = Self::new(-9, 9);
    /// Symmetric range for centered averages, -5..=5.
    pub const AVERAGE: Self = Self::new(-5, 5);

    /// Create a range.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// `max - min`; negative when inverted.
    #[must_use]
    pub const fn span(&self) -> i64 {
        self.max as i64 - self.min as i64
    }

    /// Inclusive containment of an integer.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Inclusive containment of a float. `NaN` is never contained.
    #[must_use]
    pub fn contains_f64(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }
}
