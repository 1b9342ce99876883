//! Lazy, ordered enumeration of every string over an alphabet.
//!
//! Strings are produced length by length, shortest first. Within one length
//! the current string is a mixed-radix counter of base `|alphabet|`: the
//! rightmost position varies fastest and digit `d` maps to
//! `alphabet.chars()[d]`. The resulting order is lexicographic with respect
//! to the alphabet's own character order and is identical on every run.
//!
//! Only the digit vector of the next string is held, so memory is bounded
//! by the longest length regardless of how many strings the range covers.

use crate::alphabet::Alphabet;
use crate::estimate::combinations_of_length;
use crate::range::LengthRange;

/// Iterator over all strings of every length in a [`LengthRange`].
///
/// Cloning yields an independent iterator at the same position.
#[derive(Debug, Clone)]
pub struct Combinations {
    alphabet: Alphabet,
    range: LengthRange,
    /// Digits of the next string to yield; its length is the current length
    digits: Vec<usize>,
    /// Zero-based index of the next string
    position: u128,
    /// Total number of strings, `None` if it does not fit in `u128`
    total: Option<u128>,
    exhausted: bool,
}

/// Starts a fresh enumeration of `alphabet` over `range`.
///
/// # Example
/// ```rust
/// use wordforge_core::{Alphabet, LengthRange, enumerate};
///
/// let alphabet = Alphabet::from_chars("01".chars()).unwrap();
/// let words: Vec<String> = enumerate(&alphabet, LengthRange::new(1, 2).unwrap()).collect();
/// assert_eq!(words, ["0", "1", "00", "01", "10", "11"]);
/// ```
pub fn enumerate(alphabet: &Alphabet, range: LengthRange) -> Combinations {
    Combinations::new(alphabet.clone(), range)
}

/// Returns the string at zero-based `index` without enumerating its
/// predecessors, or `None` past the end.
pub fn combination_at(alphabet: &Alphabet, range: LengthRange, index: u128) -> Option<String> {
    let mut combinations = enumerate(alphabet, range);
    if combinations.seek(index) {
        combinations.next()
    } else {
        None
    }
}

impl Combinations {
    /// Creates an iterator positioned at the first (shortest, lowest) string.
    pub fn new(alphabet: Alphabet, range: LengthRange) -> Self {
        let total = range.lengths().try_fold(0u128, |sum, length| {
            sum.checked_add(combinations_of_length(alphabet.len(), length)?)
        });
        Self {
            digits: vec![0; range.min()],
            position: 0,
            total,
            exhausted: alphabet.is_empty(),
            alphabet,
            range,
        }
    }

    /// Zero-based index of the next string to be yielded.
    pub const fn position(&self) -> u128 {
        self.position
    }

    /// Total strings in the full enumeration, if representable.
    pub const fn total(&self) -> Option<u128> {
        self.total
    }

    /// Strings still to be yielded, if representable.
    pub fn remaining(&self) -> Option<u128> {
        if self.exhausted {
            return Some(0);
        }
        self.total.map(|total| total.saturating_sub(self.position))
    }

    /// Repositions the iterator so the next string is the one at `offset`.
    ///
    /// The digits are derived directly from the offset: after skipping the
    /// counts of all shorter lengths, the remainder is written in base
    /// `|alphabet|`. Returns `false` (and exhausts the iterator) when
    /// `offset` lies past the end.
    pub fn seek(&mut self, offset: u128) -> bool {
        let radix = self.alphabet.len() as u128;
        let mut remainder = offset;

        for length in self.range.lengths() {
            if let Some(count) = combinations_of_length(self.alphabet.len(), length)
                && remainder >= count
            {
                remainder = remainder.saturating_sub(count);
                continue;
            }

            self.digits.clear();
            self.digits.resize(length, 0);
            for slot in self.digits.iter_mut().rev() {
                // remainder % radix < |alphabet|, so the cast is lossless
                *slot = remainder.checked_rem(radix).unwrap_or(0) as usize;
                remainder = remainder.checked_div(radix).unwrap_or(0);
            }
            self.position = offset;
            self.exhausted = false;
            return true;
        }

        self.position = offset;
        self.exhausted = true;
        false
    }

    fn current(&self) -> String {
        let chars = self.alphabet.chars();
        self.digits.iter().map(|&d| chars[d]).collect()
    }

    /// Advances the digit vector to the next string, moving on to the next
    /// length once every position has wrapped.
    fn advance(&mut self) {
        let radix = self.alphabet.len();
        for digit in self.digits.iter_mut().rev() {
            if let Some(next) = digit.checked_add(1).filter(|next| *next < radix) {
                *digit = next;
                return;
            }
            *digit = 0;
        }

        let next_length = self.digits.len().saturating_add(1);
        if self.range.contains(next_length) {
            self.digits.clear();
            self.digits.resize(next_length, 0);
        } else {
            self.exhausted = true;
        }
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let item = self.current();
        self.position = self.position.saturating_add(1);
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(remaining)) => (remaining, Some(remaining)),
            _ => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Combinations {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::alphabet::{CharacterClass, build_alphabet};

    fn alphabet(chars: &str) -> Alphabet {
        Alphabet::from_chars(chars.chars()).unwrap()
    }

    fn range(min: usize, max: usize) -> LengthRange {
        LengthRange::new(min, max).unwrap()
    }

    #[test]
    fn test_binary_order() {
        let words: Vec<String> = enumerate(&alphabet("01"), range(1, 2)).collect();
        assert_eq!(words, ["0", "1", "00", "01", "10", "11"]);
    }

    #[test]
    fn test_order_follows_alphabet_not_codepoints() {
        let words: Vec<String> = enumerate(&alphabet("ba"), range(2, 2)).collect();
        assert_eq!(words, ["bb", "ba", "ab", "aa"]);
    }

    #[test]
    fn test_single_character_alphabet() {
        let words: Vec<String> = enumerate(&alphabet("x"), range(1, 4)).collect();
        assert_eq!(words, ["x", "xx", "xxx", "xxxx"]);
    }

    #[test]
    fn test_min_above_one_skips_shorter() {
        let words: Vec<String> = enumerate(&alphabet("ab"), range(3, 3)).collect();
        assert_eq!(words.len(), 8);
        assert_eq!(words.first().map(String::as_str), Some("aaa"));
        assert_eq!(words.last().map(String::as_str), Some("bbb"));
    }

    #[test]
    fn test_digits_boundary_between_lengths() {
        let digits = build_alphabet(&[CharacterClass::Digits]).unwrap();
        let words: Vec<String> = enumerate(&digits, range(1, 2)).collect();
        assert_eq!(words.len(), 110);
        assert_eq!(words[9], "9");
        assert_eq!(words[10], "00");
        assert_eq!(words[109], "99");
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let mut combinations = enumerate(&alphabet("abc"), range(1, 2));
        assert_eq!(combinations.size_hint(), (12, Some(12)));
        combinations.next();
        combinations.next();
        assert_eq!(combinations.size_hint(), (10, Some(10)));
        assert_eq!(combinations.position(), 2);
        assert_eq!(combinations.by_ref().count(), 10);
        assert_eq!(combinations.size_hint(), (0, Some(0)));
        assert_eq!(combinations.next(), None);
    }

    #[test]
    fn test_multibyte_characters() {
        let words: Vec<String> = enumerate(&alphabet("éß"), range(2, 2)).collect();
        assert_eq!(words, ["éé", "éß", "ßé", "ßß"]);
    }

    #[test]
    fn test_seek_matches_full_enumeration() {
        let alpha = alphabet("abc");
        let full: Vec<String> = enumerate(&alpha, range(1, 3)).collect();

        for (index, expected) in full.iter().enumerate() {
            let mut combinations = enumerate(&alpha, range(1, 3));
            assert!(combinations.seek(index as u128));
            assert_eq!(combinations.next().as_ref(), Some(expected));
        }
    }

    #[test]
    fn test_seek_then_continue() {
        let mut combinations = enumerate(&alphabet("01"), range(1, 3));
        assert!(combinations.seek(5));
        let rest: Vec<String> = combinations.collect();
        assert_eq!(rest, ["11", "000", "001", "010", "011", "100", "101", "110", "111"]);
    }

    #[test]
    fn test_seek_past_end() {
        let mut combinations = enumerate(&alphabet("01"), range(1, 2));
        assert!(!combinations.seek(6));
        assert_eq!(combinations.next(), None);
        assert_eq!(combination_at(&alphabet("01"), range(1, 2), 6), None);
        assert_eq!(
            combination_at(&alphabet("01"), range(1, 2), 5).as_deref(),
            Some("11")
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = enumerate(&alphabet("ab"), range(1, 2));
        original.next();
        let snapshot = original.clone();

        let from_original: Vec<String> = original.collect();
        let from_snapshot: Vec<String> = snapshot.collect();
        assert_eq!(from_original, from_snapshot);
        assert_eq!(from_original.len(), 5);
    }
}
