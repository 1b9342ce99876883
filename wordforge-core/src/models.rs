//! Run results and progress events.
//!
//! All types here are plain data: produced by the writer or controller,
//! never mutated afterwards, and serializable for `--json` output.

use crate::estimate::SpaceEstimate;
use crate::format;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum RunStatus {
    /// Every combination was written and the sink closed cleanly
    Completed,
    /// Stopped by the caller, either at confirmation or mid-run
    Cancelled,
    /// Stopped by a sink failure; output up to the failure is kept
    Failed(String),
}

impl RunStatus {
    /// True for [`RunStatus::Completed`].
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Progress event delivered to the caller at the configured cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Strings handed to the writer so far; the latest may still be buffered
    pub items_written: u64,
    /// Strings the run will produce in total
    pub total_expected: u128,
    /// Wall-clock time since the writer started
    pub elapsed: Duration,
}

impl Progress {
    /// Completed share of the run in `[0.0, 1.0]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total_expected == 0 {
            return 1.0;
        }
        (self.items_written as f64 / self.total_expected as f64).min(1.0)
    }

    /// Items written per second so far.
    #[allow(clippy::cast_precision_loss)]
    pub fn rate(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.items_written as f64 / seconds
        } else {
            0.0
        }
    }

    /// Estimated time to finish at the current rate.
    #[allow(clippy::cast_precision_loss)]
    pub fn eta(&self) -> Option<Duration> {
        let rate = self.rate();
        if rate <= 0.0 {
            return None;
        }
        let remaining = self
            .total_expected
            .saturating_sub(u128::from(self.items_written)) as f64;
        Duration::try_from_secs_f64(remaining / rate).ok()
    }
}

/// Final outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Strings whose full line reached the sink
    pub count: u64,
    /// Strings the run would have produced had it completed
    pub total_expected: u128,
    /// Byte estimate shown before the run
    pub estimated_bytes: u128,
    /// Wall-clock time from writer start to sink close
    #[serde(with = "duration_secs")]
    pub elapsed: Duration,
    /// Human-readable destination, e.g. a file path or socket address
    pub destination: String,
    /// When the run started
    pub started_at: chrono::DateTime<chrono::Utc>,
    /// Terminal status
    pub status: RunStatus,
}

impl RunReport {
    /// Report for a run that ended before its first item was written.
    fn unstarted(estimate: &SpaceEstimate, destination: impl Into<String>, status: RunStatus) -> Self {
        Self {
            count: 0,
            total_expected: estimate.total_combinations,
            estimated_bytes: estimate.estimated_bytes,
            elapsed: Duration::ZERO,
            destination: destination.into(),
            started_at: chrono::Utc::now(),
            status,
        }
    }

    /// Report for a run the caller declined at confirmation time.
    pub fn declined(estimate: &SpaceEstimate, destination: impl Into<String>) -> Self {
        Self::unstarted(estimate, destination, RunStatus::Cancelled)
    }

    /// Report for a run whose sink could not be opened.
    pub fn open_failed(
        estimate: &SpaceEstimate,
        destination: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::unstarted(estimate, destination, RunStatus::Failed(reason.into()))
    }

    /// One-line status message, e.g. for a terminal.
    pub fn summary(&self) -> String {
        match &self.status {
            RunStatus::Completed => format!(
                "Done: {} combinations ({}) in {}. Saved to {}",
                format::format_count(u128::from(self.count)),
                format::format_megabytes(self.estimated_bytes),
                format::format_duration(self.elapsed),
                self.destination
            ),
            RunStatus::Cancelled => format!(
                "Cancelled after {} of {} combinations",
                format::format_count(u128::from(self.count)),
                format::format_count(self.total_expected)
            ),
            RunStatus::Failed(reason) => format!(
                "Failed after {} combinations: {}",
                format::format_count(u128::from(self.count)),
                reason
            ),
        }
    }

    /// Pretty-printed JSON rendering of the report.
    ///
    /// # Errors
    /// Returns [`WordforgeError::Serialization`](crate::WordforgeError) if
    /// encoding fails.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::WordforgeError::Serialization {
            context: "Run report serialization".to_string(),
            source: e,
        })
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub(super) fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
