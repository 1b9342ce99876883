//! Output size estimation without enumeration.
//!
//! The combination count is exact. The byte estimate is a heuristic: it
//! charges every entry the average of the shortest and longest length plus
//! one separator byte, which under-weights the (far more numerous) longest
//! strings. It also assumes one byte per character, which holds for every
//! built-in character class.

use crate::format;
use crate::range::LengthRange;
use crate::{Result, WordforgeError};
use serde::{Deserialize, Serialize};

/// Size of a prospective run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceEstimate {
    /// Exact number of strings the run will produce
    pub total_combinations: u128,
    /// Approximate output size in bytes, separators included
    pub estimated_bytes: u128,
}

impl SpaceEstimate {
    /// Estimated size in mebibytes, as shown to users.
    #[allow(clippy::cast_precision_loss)]
    pub fn estimated_megabytes(&self) -> f64 {
        self.estimated_bytes as f64 / (1024.0 * 1024.0)
    }

    /// Two-line summary suitable for a confirmation prompt.
    pub fn summary(&self) -> String {
        format!(
            "Total combinations: {}\nEstimated file size: {:.2} MB",
            format::format_count(self.total_combinations),
            self.estimated_megabytes()
        )
    }
}

/// Computes the combination count and byte estimate for a run.
///
/// `total_combinations` is the sum of `alphabet_size^L` over every length
/// `L` in `range`. `estimated_bytes` is
/// `total_combinations * ((min + max) / 2 + 1)`, floored.
///
/// # Errors
/// - [`WordforgeError::EmptyAlphabet`] when `alphabet_size` is zero
/// - [`WordforgeError::EstimateOverflow`] when any intermediate value
///   exceeds `u128`
///
/// # Example
/// ```rust
/// use wordforge_core::{LengthRange, estimate};
///
/// let est = estimate(2, LengthRange::new(1, 3).unwrap()).unwrap();
/// assert_eq!(est.total_combinations, 14);
/// ```
pub fn estimate(alphabet_size: usize, range: LengthRange) -> Result<SpaceEstimate> {
    if alphabet_size == 0 {
        return Err(WordforgeError::EmptyAlphabet);
    }

    let overflow = || WordforgeError::EstimateOverflow {
        alphabet_size,
        max_length: range.max(),
    };

    let total_combinations = total_combinations(alphabet_size, range).ok_or_else(overflow)?;

    // (min + max + 2) / 2 == average length + 1, kept integral until the end
    let weight = range
        .min()
        .checked_add(range.max())
        .and_then(|sum| sum.checked_add(2))
        .ok_or_else(overflow)?;
    let estimated_bytes = total_combinations
        .checked_mul(weight as u128)
        .map(|scaled| scaled / 2)
        .ok_or_else(overflow)?;

    Ok(SpaceEstimate {
        total_combinations,
        estimated_bytes,
    })
}

/// Number of strings of exactly `length` characters, or `None` on overflow.
pub fn combinations_of_length(alphabet_size: usize, length: usize) -> Option<u128> {
    let exponent = u32::try_from(length).ok()?;
    (alphabet_size as u128).checked_pow(exponent)
}

fn total_combinations(alphabet_size: usize, range: LengthRange) -> Option<u128> {
    range.lengths().try_fold(0u128, |total, length| {
        total.checked_add(combinations_of_length(alphabet_size, length)?)
    })
}
