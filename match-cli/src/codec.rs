//! Line grammar for the order stream (§6 external interfaces).
//!
//! One input per line; `#`-prefixed and empty lines are ignored; fields are
//! whitespace-separated; numbers are unsigned decimals.

use match_core::prelude::*;
use thiserror::Error;

/// A single parsed input: either an order submission or a cancellation.
/// Blank/comment lines parse to `None` rather than a variant here.
#[derive(Debug, Clone)]
pub enum Input {
    Submit(Order),
    Cancel(OrderId),
}

/// §7 kind-1 malformed-input faults, one variant per defect so the
/// diagnostic names what's actually wrong instead of a generic parse error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unknown input kind {0:?}")]
    UnknownKind(String),
    #[error("wrong field count for {kind}: expected {expected}, got {got}")]
    WrongFieldCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid side {0:?}: expected B or S")]
    BadSide(String),
    #[error("unparseable number {0:?}")]
    BadNumber(String),
    #[error("iceberg peak {peak} exceeds full size {full}")]
    PeakExceedsFull { peak: u64, full: u64 },
    #[error("{field} must be > 0")]
    ZeroSize { field: &'static str },
}

/// Parses one line. Returns `Ok(None)` for comment/blank lines that carry no
/// input, `Ok(Some(input))` for a well-formed one, `Err` for a malformed one.
pub fn parse_line(line: &str) -> Result<Option<Input>, CodecError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let kind = fields[0];

    match kind {
        "L" => Ok(Some(Input::Submit(parse_resting(&fields, "L", |s, id, price, size| {
            Order::limit(s, id, price, size)
        })?))),
        "O" => Ok(Some(Input::Submit(parse_resting(&fields, "O", |s, id, price, size| {
            Order::aggress(s, id, price, size)
        })?))),
        "I" => Ok(Some(Input::Submit(parse_iceberg(&fields)?))),
        "M" => Ok(Some(Input::Submit(parse_market(&fields)?))),
        "C" => Ok(Some(Input::Cancel(parse_cancel(&fields)?))),
        other => Err(CodecError::UnknownKind(other.to_string())),
    }
}

fn parse_side(raw: &str) -> Result<Side, CodecError> {
    match raw {
        "B" => Ok(Side::Buy),
        "S" => Ok(Side::Sell),
        other => Err(CodecError::BadSide(other.to_string())),
    }
}

fn parse_number(raw: &str) -> Result<u64, CodecError> {
    raw.parse::<u64>()
        .map_err(|_| CodecError::BadNumber(raw.to_string()))
}

/// Shared shape of `L` and `O`: `<kind> <B|S> <id> <price> <size>`.
fn parse_resting(
    fields: &[&str],
    kind: &'static str,
    build: impl Fn(Side, OrderId, Price, Size) -> Order,
) -> Result<Order, CodecError> {
    if fields.len() != 5 {
        return Err(CodecError::WrongFieldCount {
            kind,
            expected: 5,
            got: fields.len(),
        });
    }
    let side = parse_side(fields[1])?;
    let id = parse_number(fields[2])?;
    let price = parse_number(fields[3])?;
    let size = parse_number(fields[4])?;
    if size == 0 {
        return Err(CodecError::ZeroSize { field: "size" });
    }
    Ok(build(side, id, price, size))
}

/// `I <B|S> <id> <price> <full> <peak>`.
fn parse_iceberg(fields: &[&str]) -> Result<Order, CodecError> {
    if fields.len() != 6 {
        return Err(CodecError::WrongFieldCount {
            kind: "I",
            expected: 6,
            got: fields.len(),
        });
    }
    let side = parse_side(fields[1])?;
    let id = parse_number(fields[2])?;
    let price = parse_number(fields[3])?;
    let full = parse_number(fields[4])?;
    let peak = parse_number(fields[5])?;
    if peak == 0 {
        return Err(CodecError::ZeroSize { field: "peak" });
    }
    if peak > full {
        return Err(CodecError::PeakExceedsFull { peak, full });
    }
    Ok(Order::iceberg(side, id, price, full, peak))
}

/// `M <B|S> <id> <size>`.
fn parse_market(fields: &[&str]) -> Result<Order, CodecError> {
    if fields.len() != 4 {
        return Err(CodecError::WrongFieldCount {
            kind: "M",
            expected: 4,
            got: fields.len(),
        });
    }
    let side = parse_side(fields[1])?;
    let id = parse_number(fields[2])?;
    let size = parse_number(fields[3])?;
    if size == 0 {
        return Err(CodecError::ZeroSize { field: "size" });
    }
    Ok(Order::market(side, id, size))
}

/// `C <id>`.
fn parse_cancel(fields: &[&str]) -> Result<OrderId, CodecError> {
    if fields.len() != 2 {
        return Err(CodecError::WrongFieldCount {
            kind: "C",
            expected: 2,
            got: fields.len(),
        });
    }
    parse_number(fields[1])
}

/// Formats one trade record: `M <buyId> <sellId> <price> <size>`.
pub fn format_match(m: &Match) -> String {
    format!("M {} {} {} {}", m.buy_id, m.sell_id, m.price, m.size)
}

/// Formats one resting order: `O <B|S> <id> <price> <size>`.
pub fn format_resting(order: &Order) -> String {
    let side = match order.side {
        Side::Buy => "B",
        Side::Sell => "S",
    };
    format!("O {} {} {} {}", side, order.id, order.price, order.size)
}
