//! Read-process-report loop and error policy (§6, §7).

use crate::codec::{self, Input};
use anyhow::{Context, Result};
use match_core::prelude::*;
use std::io::{BufRead, Write};

/// Drives `engine` over every line read from `input`, writing trades and book
/// snapshots to `output` and diagnostics to `diagnostics`.
///
/// Kind-1 (malformed input) and kind-2 (bad order id) faults are per-input:
/// the offending line is discarded, a diagnostic is written, and the loop
/// continues. When `propagate_bad_id` is set, a kind-2 fault instead
/// terminates the loop by returning `Err` (§7 policy).
pub fn run(
    engine: &mut Engine,
    input: impl BufRead,
    mut output: impl Write,
    mut diagnostics: impl Write,
    propagate_bad_id: bool,
) -> Result<()> {
    for (lineno, line) in input.lines().enumerate() {
        let line = line.context("failed to read input line")?;
        let lineno = lineno + 1;

        let parsed = match codec::parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(parsed)) => parsed,
            Err(err) => {
                tracing::warn!(lineno, %err, "malformed input discarded");
                writeln!(diagnostics, "line {lineno}: {err}")?;
                continue;
            }
        };

        match dispatch(engine, parsed, lineno) {
            Ok(trades) => {
                for m in trades {
                    writeln!(output, "{}", codec::format_match(m))?;
                }
                write_snapshot(engine, &mut output)?;
            }
            Err(err) => {
                tracing::warn!(lineno, %err, "bad order id fault");
                writeln!(diagnostics, "line {lineno}: {err}")?;
                if propagate_bad_id {
                    return Err(err.into());
                }
            }
        }
    }
    Ok(())
}

/// A single `submit`/`cancel` dispatch, logging the accepted input at debug
/// level (§10's ambient observability) before running it through the engine.
fn dispatch<'a>(
    engine: &'a mut Engine,
    input: Input,
    lineno: usize,
) -> std::result::Result<&'a [Match], BookError> {
    match input {
        Input::Submit(order) => {
            tracing::debug!(lineno, kind = ?order.kind, id = order.id, side = ?order.side, "accepted submission");
            engine.submit(order)
        }
        Input::Cancel(id) => {
            tracing::debug!(lineno, id, "accepted cancel");
            engine.cancel(id)?;
            Ok(&[])
        }
    }
}

/// Writes the full book snapshot: all Buys in book order, then all Sells.
fn write_snapshot(engine: &Engine, output: &mut impl Write) -> Result<()> {
    for order in engine.book().iterate(Side::Buy) {
        writeln!(output, "{}", codec::format_resting(order))?;
    }
    for order in engine.book().iterate(Side::Sell) {
        writeln!(output, "{}", codec::format_resting(order))?;
    }
    Ok(())
}
