//! CLI definition for the `tandem` binary.
//!
//! Uses clap derive macros for argument parsing. There are no
//! subcommands: one invocation runs one refactor/review round trip.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// The demo snippet used when no input is given.
pub const SAMPLE_SNIPPET: &str =
    "'FizzBuzz' if x % 15 == 0 else ('Fizz' if x % 3 == 0 else ('Buzz' if x % 6 == 0 else x))";

/// Refactor a code snippet with one LLM and have a second LLM review it.
#[derive(Parser)]
#[command(name = "tandem", version, about, long_about = None)]
pub struct Cli {
    /// Code snippet to refactor. Falls back to --file, then to a
    /// built-in sample.
    pub snippet: Option<String>,

    /// Read the snippet from a file instead of the command line.
    #[arg(long, value_name = "PATH", conflicts_with = "snippet")]
    pub file: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long)]
    pub json: bool,

    /// Suppress raw response dumps and non-error logging.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the snippet from the positional argument, the --file path,
    /// or the built-in sample, in that order.
    pub fn resolve_snippet(&self) -> anyhow::Result<String> {
        if let Some(ref snippet) = self.snippet {
            return Ok(snippet.clone());
        }
        if let Some(ref path) = self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read snippet from {}", path.display()));
        }
        Ok(SAMPLE_SNIPPET.to_string())
    }
}
