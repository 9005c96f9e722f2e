//! Command-line configuration (§10 AMBIENT STACK: Configuration).

use clap::Parser;
use std::path::PathBuf;

/// Reads order-stream input, drives a matching engine, reports trades and
/// book state.
#[derive(Parser, Debug)]
#[command(name = "match-cli", author, version, about)]
pub struct Cli {
    /// Input file to read the order stream from; defaults to stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file to write trades and book snapshots to; defaults to stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Terminate on the first bad-order-id fault (duplicate insert or
    /// unknown cancel) instead of the default swallow-and-continue policy
    /// (§7 error handling policy).
    #[arg(long)]
    pub propagate_bad_id: bool,
}
