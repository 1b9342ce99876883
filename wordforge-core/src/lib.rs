//! Core engine for wordforge.
//!
//! This crate enumerates every string of a configurable length range over a
//! configurable alphabet and streams the results to a sink, with a size
//! estimate up front, progress callbacks while running, and cooperative
//! cancellation.
//!
//! # Guarantees
//! - Output is never materialized: memory use is bounded by the longest
//!   string, not by the number of strings
//! - Enumeration order is deterministic and part of the public contract
//! - Combination counts are exact or an explicit overflow error
//! - Every exit path closes the sink; partial output is kept on
//!   cancellation or failure
//!
//! # Architecture
//! Components, leaf first:
//! - [`alphabet`]: character classes and alphabet composition
//! - [`estimate`]: combination counts and byte estimates
//! - [`enumerate`](mod@enumerate): lazy mixed-radix enumeration
//! - [`writer`]: buffered, cancellable streaming with progress
//! - [`controller`]: estimate, confirm, execute, report

pub mod alphabet;
pub mod cancel;
pub mod config;
pub mod controller;
pub mod enumerate;
pub mod error;
pub mod estimate;
pub mod format;
pub mod logging;
pub mod models;
pub mod range;
pub mod sink;
pub mod writer;

// Re-export commonly used types
pub use alphabet::{Alphabet, CharacterClass, build_alphabet};
pub use cancel::CancellationToken;
pub use config::{CharsetSource, GenerationOptions, WriterConfig};
pub use controller::{RunController, RunPlan};
pub use enumerate::{Combinations, combination_at, enumerate};
pub use error::{Result, WordforgeError};
pub use estimate::{SpaceEstimate, estimate};
pub use logging::init_logging;
pub use models::{Progress, RunReport, RunStatus};
pub use range::LengthRange;
pub use sink::SinkDescriptor;
pub use writer::StreamWriter;
