//! Validated string length ranges.

use crate::{Result, WordforgeError};
use serde::Serialize;

/// Default upper bound on generated string length.
pub const DEFAULT_MAX_LENGTH_CEILING: usize = 10;

/// Inclusive range of string lengths, `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// Creates a range, checking `1 <= min <= max`.
    ///
    /// # Errors
    /// Returns [`WordforgeError::InvalidRange`] when either bound is zero or
    /// `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || max == 0 {
            return Err(WordforgeError::invalid_range(
                min,
                max,
                "lengths must be at least 1",
            ));
        }
        if min > max {
            return Err(WordforgeError::invalid_range(
                min,
                max,
                "min length cannot be greater than max length",
            ));
        }
        Ok(Self { min, max })
    }

    /// Creates a range and additionally enforces `max <= ceiling`.
    ///
    /// # Errors
    /// Returns [`WordforgeError::InvalidRange`] for any violated bound.
    pub fn bounded(min: usize, max: usize, ceiling: usize) -> Result<Self> {
        let range = Self::new(min, max)?;
        if max > ceiling {
            return Err(WordforgeError::invalid_range(
                min,
                max,
                format!("max length exceeds the configured ceiling of {}", ceiling),
            ));
        }
        Ok(range)
    }

    /// Shortest length.
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Longest length.
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Lengths in ascending order.
    pub const fn lengths(&self) -> std::ops::RangeInclusive<usize> {
        self.min..=self.max
    }

    /// True when `len` falls inside the range.
    pub const fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

impl std::fmt::Display for LengthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
