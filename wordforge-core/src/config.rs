//! Generation and writer configuration.
//!
//! Options are plain immutable values built with `with_*` methods and
//! passed into the controller; nothing is read from process-wide state.

use crate::alphabet::{Alphabet, CharacterClass, build_alphabet};
use crate::range::{DEFAULT_MAX_LENGTH_CEILING, LengthRange};
use crate::{Result, WordforgeError};
use serde::{Deserialize, Serialize};

/// Default number of items between progress events.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Default capacity of the write buffer in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Configuration for the streaming writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Items between progress callbacks
    pub progress_interval: u64,
    /// Bytes buffered before each write to the sink
    pub buffer_capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl WriterConfig {
    /// Creates a writer config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the progress cadence.
    pub const fn with_progress_interval(mut self, items: u64) -> Self {
        self.progress_interval = items;
        self
    }

    /// Builder method to set the buffer capacity.
    pub const fn with_buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = bytes;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns a configuration error if the progress interval or buffer
    /// capacity is zero.
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(WordforgeError::configuration(
                "progress_interval must be greater than 0",
            ));
        }
        if self.buffer_capacity == 0 {
            return Err(WordforgeError::configuration(
                "buffer_capacity must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Where the alphabet comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetSource {
    /// Union of named character classes in canonical order
    Classes(Vec<CharacterClass>),
    /// Explicit characters in the given order
    Custom(String),
}

/// Everything a run needs besides its length range and sink.
///
/// # Example
/// ```rust
/// use wordforge_core::{CharacterClass, GenerationOptions};
///
/// let options = GenerationOptions::new()
///     .with_classes([CharacterClass::Digits])
///     .with_progress_interval(500);
///
/// assert!(options.validate().is_ok());
/// assert_eq!(options.alphabet().unwrap().len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Alphabet source
    pub charset: CharsetSource,
    /// Largest max length accepted for a range
    pub max_length_ceiling: usize,
    /// Streaming writer settings
    pub writer: WriterConfig,
}

impl Default for GenerationOptions {
    /// Lowercase and digits.
    fn default() -> Self {
        Self {
            charset: CharsetSource::Classes(vec![
                CharacterClass::Lowercase,
                CharacterClass::Digits,
            ]),
            max_length_ceiling: DEFAULT_MAX_LENGTH_CEILING,
            writer: WriterConfig::default(),
        }
    }
}

impl GenerationOptions {
    /// Creates options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to select character classes.
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        self.charset = CharsetSource::Classes(classes.into_iter().collect());
        self
    }

    /// Builder method to use an explicit character list instead of classes.
    pub fn with_custom_charset(mut self, chars: impl Into<String>) -> Self {
        self.charset = CharsetSource::Custom(chars.into());
        self
    }

    /// Builder method to set the max length ceiling.
    pub const fn with_max_length_ceiling(mut self, ceiling: usize) -> Self {
        self.max_length_ceiling = ceiling;
        self
    }

    /// Builder method to set the progress cadence.
    pub const fn with_progress_interval(mut self, items: u64) -> Self {
        self.writer.progress_interval = items;
        self
    }

    /// Builder method to set the writer buffer capacity.
    pub const fn with_buffer_capacity(mut self, bytes: usize) -> Self {
        self.writer.buffer_capacity = bytes;
        self
    }

    /// Validates the options without building the alphabet.
    ///
    /// # Errors
    /// Returns a configuration error for a zero ceiling or invalid writer
    /// settings.
    pub fn validate(&self) -> Result<()> {
        if self.max_length_ceiling == 0 {
            return Err(WordforgeError::configuration(
                "max_length_ceiling must be at least 1",
            ));
        }
        self.writer.validate()
    }

    /// Builds the alphabet described by these options.
    ///
    /// # Errors
    /// Returns [`WordforgeError::EmptyAlphabet`] when nothing is selected.
    pub fn alphabet(&self) -> Result<Alphabet> {
        match &self.charset {
            CharsetSource::Classes(classes) => build_alphabet(classes),
            CharsetSource::Custom(chars) => Alphabet::from_chars(chars.chars()),
        }
    }

    /// Validates a length range against the configured ceiling.
    ///
    /// # Errors
    /// Returns [`WordforgeError::InvalidRange`] for any violated bound.
    pub fn length_range(&self, min: usize, max: usize) -> Result<LengthRange> {
        LengthRange::bounded(min, max, self.max_length_ceiling)
    }
}
