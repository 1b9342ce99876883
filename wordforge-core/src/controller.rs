//! Run orchestration: estimate, confirm, execute, report.
//!
//! The controller performs all pre-flight checks before anything touches a
//! sink. Its only failure outputs are the pre-flight errors; once the caller
//! confirms, every outcome (including a sink that cannot be opened) is a
//! [`RunReport`]. Nothing is retried.

use crate::alphabet::Alphabet;
use crate::cancel::CancellationToken;
use crate::config::GenerationOptions;
use crate::enumerate::enumerate;
use crate::estimate::{SpaceEstimate, estimate};
use crate::models::{Progress, RunReport};
use crate::range::LengthRange;
use crate::sink::SinkDescriptor;
use crate::writer::StreamWriter;
use crate::Result;
use std::io::Write;
use std::ops::RangeInclusive;
use tracing::{debug, error, info};

/// Validated inputs of a run together with its size estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Characters to combine
    pub alphabet: Alphabet,
    /// Lengths to generate
    pub range: LengthRange,
    /// Size of the run
    pub estimate: SpaceEstimate,
}

/// Drives a single run from options to report.
///
/// # Example
/// ```rust
/// use wordforge_core::{CancellationToken, GenerationOptions, RunController, RunStatus};
///
/// let controller = RunController::new(GenerationOptions::new().with_custom_charset("01"));
/// let mut out = Vec::new();
/// let report = controller
///     .run_to_writer(1..=2, &mut out, "memory", |_| true, &CancellationToken::new(), |_| {})
///     .unwrap();
///
/// assert_eq!(report.status, RunStatus::Completed);
/// assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n00\n01\n10\n11\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunController {
    options: GenerationOptions,
}

impl RunController {
    /// Creates a controller for the given options.
    pub const fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    /// The options this controller runs with.
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Runs every pre-flight check and computes the estimate.
    ///
    /// Checks run in order: options, alphabet, length range, estimate. The
    /// first failure is returned.
    ///
    /// # Errors
    /// `Configuration`, `EmptyAlphabet`, `InvalidRange`, or
    /// `EstimateOverflow`.
    pub fn prepare(&self, lengths: RangeInclusive<usize>) -> Result<RunPlan> {
        self.options.validate()?;
        let alphabet = self.options.alphabet()?;
        let range = self
            .options
            .length_range(*lengths.start(), *lengths.end())?;
        let estimate = estimate(alphabet.len(), range)?;

        debug!(
            alphabet = %alphabet,
            %range,
            total = %estimate.total_combinations,
            bytes = %estimate.estimated_bytes,
            "Prepared run"
        );

        Ok(RunPlan {
            alphabet,
            range,
            estimate,
        })
    }

    /// Runs against a sink descriptor, opening it only after confirmation.
    ///
    /// `confirm` receives the estimate; returning `false` yields a
    /// `Cancelled` report with a count of zero and leaves the sink untouched.
    ///
    /// # Errors
    /// Only pre-flight errors from [`prepare`](Self::prepare).
    pub fn run<C, F>(
        &self,
        lengths: RangeInclusive<usize>,
        sink: &SinkDescriptor,
        confirm: C,
        cancel: &CancellationToken,
        on_progress: F,
    ) -> Result<RunReport>
    where
        C: FnOnce(&SpaceEstimate) -> bool,
        F: FnMut(Progress),
    {
        let plan = self.prepare(lengths)?;
        let destination = sink.to_string();

        if !confirm(&plan.estimate) {
            info!(%destination, "Run declined at confirmation");
            return Ok(RunReport::declined(&plan.estimate, destination));
        }

        let writer = match sink.open() {
            Ok(writer) => writer,
            Err(e) => {
                error!(%destination, "Failed to open sink: {}", e);
                return Ok(RunReport::open_failed(
                    &plan.estimate,
                    destination,
                    e.to_string(),
                ));
            }
        };

        Ok(self.execute(&plan, writer, &destination, cancel, on_progress))
    }

    /// Runs against an already-open writer, e.g. an in-memory buffer.
    ///
    /// `destination` only labels the report.
    ///
    /// # Errors
    /// Only pre-flight errors from [`prepare`](Self::prepare).
    pub fn run_to_writer<W, C, F>(
        &self,
        lengths: RangeInclusive<usize>,
        writer: W,
        destination: &str,
        confirm: C,
        cancel: &CancellationToken,
        on_progress: F,
    ) -> Result<RunReport>
    where
        W: Write,
        C: FnOnce(&SpaceEstimate) -> bool,
        F: FnMut(Progress),
    {
        let plan = self.prepare(lengths)?;

        if !confirm(&plan.estimate) {
            info!(destination, "Run declined at confirmation");
            return Ok(RunReport::declined(&plan.estimate, destination));
        }

        Ok(self.execute(&plan, writer, destination, cancel, on_progress))
    }

    /// Streams a prepared plan into `writer`.
    pub fn execute<W, F>(
        &self,
        plan: &RunPlan,
        writer: W,
        destination: &str,
        cancel: &CancellationToken,
        on_progress: F,
    ) -> RunReport
    where
        W: Write,
        F: FnMut(Progress),
    {
        info!(
            destination,
            alphabet_size = plan.alphabet.len(),
            range = %plan.range,
            total = %plan.estimate.total_combinations,
            "Starting generation"
        );

        StreamWriter::new(self.options.writer.clone()).write(
            enumerate(&plan.alphabet, plan.range),
            writer,
            destination,
            &plan.estimate,
            on_progress,
            cancel,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::alphabet::CharacterClass;
    use crate::models::RunStatus;
    use crate::WordforgeError;

    fn binary() -> RunController {
        RunController::new(GenerationOptions::new().with_custom_charset("01"))
    }

    #[test]
    fn test_prepare_builds_plan() {
        let plan = binary().prepare(1..=2).unwrap();
        assert_eq!(plan.alphabet.as_string(), "01");
        assert_eq!(plan.range, LengthRange::new(1, 2).unwrap());
        assert_eq!(plan.estimate.total_combinations, 6);
    }

    #[test]
    fn test_empty_alphabet_checked_before_range() {
        let controller = RunController::new(GenerationOptions::new().with_classes(Vec::new()));
        // Range is also invalid, but the alphabet is checked first
        assert!(matches!(
            controller.prepare(5..=2),
            Err(WordforgeError::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_inverted_range_skips_confirmation() {
        let mut confirmed = false;
        let result = binary().run_to_writer(
            5..=2,
            std::io::sink(),
            "null",
            |_| {
                confirmed = true;
                true
            },
            &CancellationToken::new(),
            |_| {},
        );

        assert!(matches!(
            result,
            Err(WordforgeError::InvalidRange { min: 5, max: 2, .. })
        ));
        assert!(!confirmed);
    }

    #[test]
    fn test_ceiling_enforced() {
        let controller = RunController::new(
            GenerationOptions::new()
                .with_classes([CharacterClass::Digits])
                .with_max_length_ceiling(3),
        );
        assert!(controller.prepare(1..=3).is_ok());
        assert!(matches!(
            controller.prepare(1..=4),
            Err(WordforgeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_overflow_is_preflight() {
        let controller = RunController::new(
            GenerationOptions::new()
                .with_classes(CharacterClass::ALL)
                .with_max_length_ceiling(64),
        );
        assert!(matches!(
            controller.prepare(1..=64),
            Err(WordforgeError::EstimateOverflow { .. })
        ));
    }

    #[test]
    fn test_declined_run_writes_nothing() {
        let mut out = Vec::new();
        let mut seen = None;
        let report = binary()
            .run_to_writer(
                1..=3,
                &mut out,
                "memory",
                |estimate| {
                    seen = Some(*estimate);
                    false
                },
                &CancellationToken::new(),
                |_| {},
            )
            .unwrap();

        assert_eq!(report.status, RunStatus::Cancelled);
        assert_eq!(report.count, 0);
        assert_eq!(report.total_expected, 14);
        assert_eq!(seen.map(|e| e.total_combinations), Some(14));
        assert!(out.is_empty());
    }

    #[test]
    fn test_completed_run_report() {
        let mut out = Vec::new();
        let report = binary()
            .run_to_writer(
                1..=2,
                &mut out,
                "memory",
                |_| true,
                &CancellationToken::new(),
                |_| {},
            )
            .unwrap();

        assert_eq!(report.status, RunStatus::Completed);
        assert_eq!(report.count, 6);
        assert_eq!(u128::from(report.count), report.total_expected);
        assert_eq!(report.estimated_bytes, 15);
    }

    #[test]
    fn test_unopenable_sink_reports_failed() {
        let dir = tempfile::tempdir().unwrap();
        let sink = SinkDescriptor::File(dir.path().join("no-such-dir").join("out.txt"));

        let report = binary()
            .run(1..=2, &sink, |_| true, &CancellationToken::new(), |_| {})
            .unwrap();

        assert!(matches!(report.status, RunStatus::Failed(_)));
        assert_eq!(report.count, 0);
    }
}
