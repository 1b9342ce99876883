//! Character classes and alphabet composition.
//!
//! An [`Alphabet`] is the ordered, duplicate-free character set that every
//! generated string is drawn from. Its character order defines the
//! enumeration order, so composition is fully deterministic: selected
//! classes are always concatenated in canonical class order regardless of
//! how the caller listed them.

use crate::{Result, WordforgeError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Named character sets that can be combined into an alphabet.
///
/// Variants are declared in canonical composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// `a` through `z`
    Lowercase,
    /// `A` through `Z`
    Uppercase,
    /// `0` through `9`
    Digits,
    /// `!@#$%^&*`
    Symbols,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [Self; 4] = [
        Self::Lowercase,
        Self::Uppercase,
        Self::Digits,
        Self::Symbols,
    ];

    /// The fixed literal characters of this class.
    pub const fn literal(self) -> &'static str {
        match self {
            Self::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            Self::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Digits => "0123456789",
            Self::Symbols => "!@#$%^&*",
        }
    }

    /// Short human-readable label, e.g. `Lowercase (a-z)`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lowercase => "Lowercase (a-z)",
            Self::Uppercase => "Uppercase (A-Z)",
            Self::Digits => "Digits (0-9)",
            Self::Symbols => "Symbols (!@#$%^&*)",
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lowercase => write!(f, "lowercase"),
            Self::Uppercase => write!(f, "uppercase"),
            Self::Digits => write!(f, "digits"),
            Self::Symbols => write!(f, "symbols"),
        }
    }
}

/// Ordered sequence of distinct characters. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from an explicit character sequence.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns [`WordforgeError::EmptyAlphabet`] when `chars` yields nothing.
    ///
    /// # Example
    /// ```rust
    /// use wordforge_core::Alphabet;
    ///
    /// let alphabet = Alphabet::from_chars("abca".chars()).unwrap();
    /// assert_eq!(alphabet.as_string(), "abc");
    /// ```
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut seen = HashSet::new();
        let chars: Vec<char> = chars.into_iter().filter(|c| seen.insert(*c)).collect();

        if chars.is_empty() {
            return Err(WordforgeError::EmptyAlphabet);
        }

        Ok(Self { chars })
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed alphabet; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in enumeration order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The alphabet rendered as a string.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = WordforgeError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_chars(value.chars())
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.as_string()
    }
}

/// Composes an alphabet from a selection of character classes.
///
/// Classes are concatenated in canonical order (lowercase, uppercase,
/// digits, symbols) whatever order `classes` lists them in, then
/// deduplicated preserving first occurrence.
///
/// # Errors
/// Returns [`WordforgeError::EmptyAlphabet`] when `classes` is empty.
///
/// # Example
/// ```rust
/// use wordforge_core::{CharacterClass, build_alphabet};
///
/// let alphabet = build_alphabet(&[CharacterClass::Digits]).unwrap();
/// assert_eq!(alphabet.len(), 10);
/// ```
pub fn build_alphabet(classes: &[CharacterClass]) -> Result<Alphabet> {
    if classes.is_empty() {
        return Err(WordforgeError::EmptyAlphabet);
    }

    let composed = CharacterClass::ALL
        .iter()
        .filter(|class| classes.contains(class))
        .flat_map(|class| class.literal().chars());

    let alphabet = Alphabet::from_chars(composed)?;
    tracing::debug!(
        classes = ?classes,
        size = alphabet.len(),
        "Composed alphabet"
    );
    Ok(alphabet)
}
