use crate::types::OrderId;
use thiserror::Error;

/// Errors raised by `Book::insert` and `Book::remove` (§4.1, §4.5).
///
/// A failed operation leaves both side containers and the id index in their
/// pre-call state; neither variant is raised after any mutation has happened.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    #[error("duplicate order id {0}")]
    DuplicateOrderId(OrderId),
    #[error("unknown order id {0}")]
    UnknownOrderId(OrderId),
}
