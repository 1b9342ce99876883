//! Buffered, cancellable streaming of generated strings to a sink.
//!
//! Each item becomes one `\n`-terminated UTF-8 line. Lines are collected
//! into a batch of `buffer_capacity` bytes so the sink sees large writes.
//! The writer owns the sink for the duration of the run and drops it on
//! every exit path, so a file is closed and a socket shut down whether the
//! run completes, is cancelled, or fails.
//!
//! The reported count only includes lines whose final byte reached the
//! sink. A line cut short by a failing write stays in the sink but is not
//! counted.

use crate::cancel::CancellationToken;
use crate::config::WriterConfig;
use crate::estimate::SpaceEstimate;
use crate::models::{Progress, RunReport, RunStatus};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Streams a sequence of strings into a sink.
#[derive(Debug, Clone, Default)]
pub struct StreamWriter {
    config: WriterConfig,
}

impl StreamWriter {
    /// Creates a writer with the given cadence and buffering.
    pub const fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// The writer's configuration.
    pub const fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Writes every item of `items` to `sink` and reports how the run ended.
    ///
    /// Cancellation is checked before every item; `on_progress` is called
    /// after every `progress_interval` items and once more with the final
    /// count on completion. Sink failures never escape as errors: they end
    /// the run with [`RunStatus::Failed`].
    pub fn write<I, W, F>(
        &self,
        items: I,
        mut sink: W,
        destination: &str,
        estimate: &SpaceEstimate,
        mut on_progress: F,
        cancel: &CancellationToken,
    ) -> RunReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        W: Write,
        F: FnMut(Progress),
    {
        let started = Instant::now();
        let started_at = chrono::Utc::now();
        let interval = self.config.progress_interval.max(1);
        let progress = |items_written: u64| Progress {
            items_written,
            total_expected: estimate.total_combinations,
            elapsed: started.elapsed(),
        };

        debug!(
            destination,
            total = %estimate.total_combinations,
            interval,
            "Starting stream"
        );

        let mut batch = LineBatch::with_capacity(self.config.buffer_capacity);
        // Items handed to the batch, and items delivered to the sink
        let mut produced: u64 = 0;
        let mut count: u64 = 0;
        let mut last_reported: u64 = 0;
        let mut status = RunStatus::Completed;

        for item in items {
            if cancel.is_cancelled() {
                status = RunStatus::Cancelled;
                break;
            }

            batch.push(item.as_ref());
            produced = produced.saturating_add(1);

            if batch.is_full() {
                let (delivered, result) = batch.drain_into(&mut sink);
                count = count.saturating_add(delivered);
                if let Err(e) = result {
                    status = RunStatus::Failed(format!("Write to {} failed: {}", destination, e));
                    break;
                }
            }

            if produced.is_multiple_of(interval) {
                on_progress(progress(produced));
                last_reported = produced;
            }
        }

        // After a write failure the rest of the batch is discarded
        if !matches!(status, RunStatus::Failed(_)) {
            let (delivered, result) = batch.drain_into(&mut sink);
            count = count.saturating_add(delivered);
            if let Err(e) = result.and_then(|()| sink.flush()) {
                status = RunStatus::Failed(format!("Closing {} failed: {}", destination, e));
            }
        }
        drop(sink);
        let elapsed = started.elapsed();

        match &status {
            RunStatus::Completed => {
                if produced == 0 || last_reported != produced {
                    on_progress(progress(produced));
                }
                info!(count, ?elapsed, destination, "Stream completed");
            }
            RunStatus::Cancelled => warn!(count, destination, "Stream cancelled"),
            RunStatus::Failed(reason) => error!(count, destination, %reason, "Stream failed"),
        }

        RunReport {
            count,
            total_expected: estimate.total_combinations,
            estimated_bytes: estimate.estimated_bytes,
            elapsed,
            destination: destination.to_string(),
            started_at,
            status,
        }
    }
}

/// Lines waiting for the sink, with the end offset of each line.
struct LineBatch {
    bytes: Vec<u8>,
    ends: Vec<usize>,
    capacity: usize,
}

impl LineBatch {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            ends: Vec::new(),
            capacity,
        }
    }

    fn push(&mut self, item: &str) {
        self.bytes.extend_from_slice(item.as_bytes());
        self.bytes.push(b'\n');
        self.ends.push(self.bytes.len());
    }

    fn is_full(&self) -> bool {
        self.bytes.len() >= self.capacity
    }

    /// Writes the batch to `sink` and empties it.
    ///
    /// Returns the number of lines that reached the sink in full, along
    /// with the error that stopped the write, if any.
    fn drain_into<W: Write>(&mut self, sink: &mut W) -> (u64, io::Result<()>) {
        let mut written = 0usize;
        let mut result = Ok(());

        while let Some(rest) = self.bytes.get(written..).filter(|rest| !rest.is_empty()) {
            match sink.write(rest) {
                Ok(0) => {
                    result = Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "sink accepted no bytes",
                    ));
                    break;
                }
                Ok(n) => written = written.saturating_add(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }

        let delivered = self.ends.partition_point(|&end| end <= written);
        self.bytes.clear();
        self.ends.clear();
        (u64::try_from(delivered).unwrap_or(u64::MAX), result)
    }
}
