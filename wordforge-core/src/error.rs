//! Error types for wordlist generation.
//!
//! Pre-flight failures (`EmptyAlphabet`, `InvalidRange`, `EstimateOverflow`)
//! are returned before any sink is opened. Sink failures that happen while
//! streaming are folded into [`RunStatus::Failed`](crate::models::RunStatus)
//! by the writer instead of being raised.

use thiserror::Error;

/// Main error type for wordforge operations.
#[derive(Debug, Error)]
pub enum WordforgeError {
    /// No character class or character contributed to the alphabet
    #[error("Alphabet is empty: select at least one character set")]
    EmptyAlphabet,

    /// Length range is inverted, zero-based, or above the configured ceiling
    #[error("Invalid length range {min}..={max}: {reason}")]
    InvalidRange {
        min: usize,
        max: usize,
        reason: String,
    },

    /// Combination count does not fit in 128 bits
    #[error(
        "Combination count overflows 128 bits for alphabet size {alphabet_size} and max length {max_length}"
    )]
    EstimateOverflow {
        alphabet_size: usize,
        max_length: usize,
    },

    /// Destination could not be opened, written, or closed
    #[error("Sink operation failed: {context}")]
    Sink {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Serialization of a report or estimate failed
    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with WordforgeError
pub type Result<T> = std::result::Result<T, WordforgeError>;

impl WordforgeError {
    /// Creates an invalid range error
    pub fn invalid_range(min: usize, max: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            min,
            max,
            reason: reason.into(),
        }
    }

    /// Creates a sink error with context
    pub fn sink_failed(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Sink {
            context: context.into(),
            source,
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns true for errors raised before a run touches its sink.
    pub const fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::EmptyAlphabet
                | Self::InvalidRange { .. }
                | Self::EstimateOverflow { .. }
                | Self::Configuration { .. }
        )
    }
}
