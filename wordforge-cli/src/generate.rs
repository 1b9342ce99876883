//! Generate, estimate, and list workflows.
//!
//! Generation runs on a blocking worker thread while the async side waits
//! for either the worker to finish or Ctrl-C. An interrupt only sets the
//! cancellation token; the worker notices it before its next item, closes
//! the sink, and returns a `Cancelled` report.

use crate::progress::ProgressReporter;
use crate::{EstimateArgs, GenerateArgs};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};
use wordforge_core::format::{format_count, format_megabytes};
use wordforge_core::{
    CancellationToken, CharacterClass, RunController, RunReport, SinkDescriptor, SpaceEstimate,
};

/// Runs a generation from parsed arguments and returns its report.
pub async fn generate(args: &GenerateArgs, quiet: bool) -> Result<RunReport> {
    let controller = RunController::new(args.options());
    let lengths = args.alphabet.lengths();

    // Fail fast on bad input before spawning anything
    let plan = controller.prepare(lengths.clone())?;
    let sink = args.sink();
    info!("Alphabet: {} ({} characters)", plan.alphabet, plan.alphabet.len());
    info!("Lengths: {}", plan.range);
    info!("Output: {}", sink);

    let reporter = ProgressReporter::new(plan.estimate.total_combinations, quiet);
    let cancel = CancellationToken::new();

    let assume_yes = args.yes;
    let worker_cancel = cancel.clone();
    let worker_reporter = reporter.clone();
    let worker = tokio::task::spawn_blocking(move || {
        controller.run(
            lengths,
            &sink,
            |estimate| confirm(estimate, assume_yes),
            &worker_cancel,
            |progress| worker_reporter.update(progress),
        )
    });

    let joined = await_worker(worker, tokio::signal::ctrl_c(), &cancel).await;
    reporter.finish();

    let report = joined.context("Generation worker panicked")??;
    Ok(report)
}

/// Waits for `worker`, cancelling it if `interrupt` fires first.
///
/// A failure to listen for the interrupt is logged and the run continues.
async fn await_worker<T, S>(
    mut worker: JoinHandle<T>,
    interrupt: S,
    cancel: &CancellationToken,
) -> std::result::Result<T, JoinError>
where
    S: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        joined = &mut worker => joined,
        interrupted = interrupt => {
            match interrupted {
                Ok(()) => {
                    warn!("Interrupt received, cancelling run");
                    cancel.cancel();
                }
                Err(e) => warn!("Failed to listen for Ctrl-C, continuing without it: {}", e),
            }
            worker.await
        }
    }
}

/// Asks the user to confirm a run, unless `assume_yes` is set.
///
/// Anything other than `y`/`yes` on stdin declines the run.
fn confirm(estimate: &SpaceEstimate, assume_yes: bool) -> bool {
    if assume_yes {
        info!(
            "Total combinations: {}, estimated size: {}",
            format_count(estimate.total_combinations),
            format_megabytes(estimate.estimated_bytes)
        );
        return true;
    }

    let mut stderr = std::io::stderr().lock();
    let prompt = writeln!(stderr, "{}", estimate.summary())
        .and_then(|()| write!(stderr, "Do you want to continue? [y/N] "))
        .and_then(|()| stderr.flush());
    if let Err(e) = prompt {
        warn!("Failed to write confirmation prompt: {}", e);
        return false;
    }
    drop(stderr);

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => parse_answer(&answer),
        Err(e) => {
            warn!("Failed to read confirmation: {}", e);
            false
        }
    }
}

/// True for an affirmative answer.
pub fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Prints the size of a prospective run without generating it.
pub fn estimate(args: &EstimateArgs) -> Result<()> {
    let controller = RunController::new(args.alphabet.options());
    let plan = controller.prepare(args.alphabet.lengths())?;

    if args.json {
        let value = serde_json::json!({
            "alphabet": plan.alphabet,
            "alphabet_size": plan.alphabet.len(),
            "min_length": plan.range.min(),
            "max_length": plan.range.max(),
            "total_combinations": plan.estimate.total_combinations.to_string(),
            "estimated_bytes": plan.estimate.estimated_bytes.to_string(),
            "estimated_megabytes": plan.estimate.estimated_megabytes(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&value).context("Estimate serialization")?
        );
    } else {
        println!("Alphabet: {} ({} characters)", plan.alphabet, plan.alphabet.len());
        println!("Lengths: {}", plan.range);
        println!("{}", plan.estimate.summary());
    }

    Ok(())
}

/// Prints the built-in character classes.
pub fn list_classes() {
    println!("Character Classes:");
    println!();
    for class in CharacterClass::ALL {
        println!("  {:<20} {}", class.label(), class.literal());
    }
    println!();
    println!("Classes combine in the order listed above; duplicates are dropped.");
}

/// Prints the final report in the requested form.
pub fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        eprintln!("{}", report.to_json_pretty()?);
    } else if report.destination == SinkDescriptor::Stdout.to_string() {
        // Wordlist is on stdout; keep the summary off it
        eprintln!("{}", report.summary());
    } else {
        println!("{}", report.summary());
    }
    Ok(())
}
