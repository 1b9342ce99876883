//! Wordlist generation tool.
//!
//! This binary enumerates every string over a chosen alphabet between a
//! minimum and maximum length and streams them, one per line, to a file,
//! a TCP listener, or standard output.
//!
//! # Exit Codes
//! - `0` run completed, or a non-generating command succeeded
//! - `1` invalid input or a failed run
//! - `130` run cancelled by the user or by Ctrl-C

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use wordforge_cli::generate::{estimate, generate, list_classes, print_report};
use wordforge_cli::{Cli, Command};
use wordforge_core::{RunStatus, init_logging};

const EXIT_CANCELLED: u8 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.global.verbose, cli.global.quiet)?;

    match &cli.command {
        Command::Generate(args) => {
            let report = generate(args, cli.global.quiet).await?;
            print_report(&report, args.json)?;

            Ok(match &report.status {
                RunStatus::Completed => {
                    info!("Generation completed");
                    ExitCode::SUCCESS
                }
                RunStatus::Cancelled => {
                    warn!("Generation cancelled after {} items", report.count);
                    ExitCode::from(EXIT_CANCELLED)
                }
                RunStatus::Failed(reason) => {
                    error!("Generation failed: {}", reason);
                    ExitCode::FAILURE
                }
            })
        }
        Command::Estimate(args) => {
            estimate(args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Classes => {
            list_classes();
            Ok(ExitCode::SUCCESS)
        }
    }
}
