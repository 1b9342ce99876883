//! Library module for the wordforge command-line tool.
//!
//! Argument definitions live here so they can be tested without spawning
//! the binary. The run workflow is in [`generate`]; terminal progress
//! rendering is in [`progress`].

pub mod generate;
pub mod progress;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordforge_core::config::DEFAULT_PROGRESS_INTERVAL;
use wordforge_core::range::DEFAULT_MAX_LENGTH_CEILING;
use wordforge_core::{CharacterClass, GenerationOptions, SinkDescriptor};

#[derive(Parser, Debug)]
#[command(name = "wordforge")]
#[command(about = "Exhaustive wordlist generator")]
#[command(version)]
#[command(long_about = "
wordforge - Exhaustive wordlist generator

Enumerates every string between a minimum and maximum length over a chosen
character set and streams one string per line to a file, a TCP socket, or
standard output. The total number of combinations and the estimated output
size are shown before anything is written.

CHARACTER CLASSES:
- lower    a-z
- upper    A-Z
- digits   0-9
- symbols  !@#$%^&*

EXAMPLES:
  wordforge estimate --classes lower,digits --min 1 --max 6
  wordforge generate --classes digits --min 4 --max 4 --output pins.txt
  wordforge generate --charset abc123 --min 1 --max 3 --yes | grep 1
  wordforge generate --classes lower --min 1 --max 3 --connect 127.0.0.1:9000
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a wordlist
    Generate(GenerateArgs),
    /// Show the combination count and estimated size without generating
    Estimate(EstimateArgs),
    /// List available character classes
    Classes,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(
        short,
        long,
        global = true,
        help = "Suppress all output except errors"
    )]
    pub quiet: bool,
}

/// Character class names accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassArg {
    /// a-z
    #[value(alias = "lowercase")]
    Lower,
    /// A-Z
    #[value(alias = "uppercase")]
    Upper,
    /// 0-9
    Digits,
    /// !@#$%^&*
    Symbols,
}

impl From<ClassArg> for CharacterClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Lower => Self::Lowercase,
            ClassArg::Upper => Self::Uppercase,
            ClassArg::Digits => Self::Digits,
            ClassArg::Symbols => Self::Symbols,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AlphabetArgs {
    /// Character classes to combine
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        default_values = ["lower", "digits"],
        help = "Comma-separated character classes (lower,upper,digits,symbols)"
    )]
    pub classes: Vec<ClassArg>,

    /// Explicit characters, replacing the class selection
    #[arg(
        long,
        conflicts_with = "classes",
        help = "Use exactly these characters, in this order, instead of classes"
    )]
    pub charset: Option<String>,

    /// Shortest string length
    #[arg(long, help = "Minimum string length (>= 1)")]
    pub min: usize,

    /// Longest string length
    #[arg(long, help = "Maximum string length")]
    pub max: usize,

    /// Upper bound accepted for --max
    #[arg(
        long,
        env = "WORDFORGE_MAX_LENGTH",
        default_value_t = DEFAULT_MAX_LENGTH_CEILING,
        help = "Largest --max accepted"
    )]
    pub max_length_ceiling: usize,
}

impl AlphabetArgs {
    /// Generation options described by these arguments.
    pub fn options(&self) -> GenerationOptions {
        let options = GenerationOptions::new().with_max_length_ceiling(self.max_length_ceiling);
        match &self.charset {
            Some(chars) => options.with_custom_charset(chars.clone()),
            None => options.with_classes(self.classes.iter().copied().map(CharacterClass::from)),
        }
    }

    /// Requested lengths as an inclusive range, validated later.
    pub const fn lengths(&self) -> std::ops::RangeInclusive<usize> {
        self.min..=self.max
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Output file path
    #[arg(
        short,
        long,
        conflicts_with = "connect",
        help = "Write to this file (default: standard output)"
    )]
    pub output: Option<PathBuf>,

    /// TCP destination
    #[arg(long, value_name = "HOST:PORT", help = "Stream to a TCP listener")]
    pub connect: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long, help = "Do not ask for confirmation")]
    pub yes: bool,

    /// Progress cadence
    #[arg(
        long,
        env = "WORDFORGE_PROGRESS_INTERVAL",
        default_value_t = DEFAULT_PROGRESS_INTERVAL,
        help = "Items between progress updates"
    )]
    pub progress_interval: u64,

    /// Print the final report as JSON
    #[arg(long, help = "Print the run report as JSON on stderr")]
    pub json: bool,
}

impl GenerateArgs {
    /// Generation options including writer settings.
    pub fn options(&self) -> GenerationOptions {
        self.alphabet
            .options()
            .with_progress_interval(self.progress_interval)
    }

    /// Destination chosen on the command line.
    pub fn sink(&self) -> SinkDescriptor {
        match (&self.output, &self.connect) {
            (Some(path), _) => SinkDescriptor::File(path.clone()),
            (None, Some(address)) => SinkDescriptor::Tcp(address.clone()),
            (None, None) => SinkDescriptor::Stdout,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Print the estimate as JSON
    #[arg(long, help = "Print the estimate as JSON")]
    pub json: bool,
}
